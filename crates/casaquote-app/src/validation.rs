// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MIN_PHONE_DIGITS: usize = 10;

const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-()\s]{10,}$").expect("phone pattern is valid"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid area value")]
    InvalidArea,
    #[error("area {area} sq. ft is outside the supported range {min}-{max} sq. ft")]
    AreaOutOfRange { area: i64, min: i64, max: i64 },
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
    #[error("invalid phone (10+ digits)")]
    InvalidPhone,
    #[error("email is required")]
    MissingEmail,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("project description required")]
    MissingMessage,
    #[error("project description needs at least 10 characters")]
    ShortMessage,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Inclusive bounds applied to user-supplied custom areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaBounds {
    pub min: i64,
    pub max: i64,
}

impl AreaBounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, area: i64) -> bool {
        area >= self.min && area <= self.max
    }
}

impl Default for AreaBounds {
    fn default() -> Self {
        Self::new(300, 5000)
    }
}

/// Blank input means "use the category default".
pub fn parse_custom_area(input: &str) -> ValidationResult<Option<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidArea);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidArea)
}

pub fn check_area_bounds(area: i64, bounds: AreaBounds) -> ValidationResult<i64> {
    if !bounds.contains(area) {
        return Err(ValidationError::AreaOutOfRange {
            area,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(area)
}

pub fn validate_name(input: &str) -> ValidationResult<()> {
    if input.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

pub fn validate_phone(input: &str) -> ValidationResult<()> {
    if input.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    let digits = input.chars().filter(char::is_ascii_digit).count();
    if !PHONE_RE.is_match(input) || digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

pub fn validate_email(input: &str) -> ValidationResult<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_optional_email(input: &str) -> ValidationResult<()> {
    if input.trim().is_empty() {
        return Ok(());
    }
    validate_email(input)
}

pub fn validate_message(input: &str) -> ValidationResult<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    if trimmed.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::ShortMessage);
    }
    Ok(())
}

/// Formats whole currency units with Indian digit grouping, e.g. `₹10,89,000`.
pub fn format_inr(amount: i64) -> String {
    let (sign, amount) = normalize_sign(amount);
    format!("{sign}{CURRENCY_SYMBOL}{}", indian_group(amount))
}

/// Short label used on package teasers: `₹3.5L`, `₹1.2Cr`. Amounts below
/// one lakh are printed in full.
pub fn format_compact_inr(amount: i64) -> String {
    let (sign, amount) = normalize_sign(amount);
    if amount < LAKH {
        return format!("{sign}{CURRENCY_SYMBOL}{}", indian_group(amount));
    }

    let lakhs = round_tenths(amount as f64 / LAKH as f64);
    let (rounded, suffix) = if amount < CRORE && lakhs < 100.0 {
        (lakhs, "L")
    } else {
        (round_tenths(amount as f64 / CRORE as f64), "Cr")
    };

    if rounded.fract().abs() < f64::EPSILON {
        format!("{sign}{CURRENCY_SYMBOL}{rounded:.0}{suffix}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{rounded:.1}{suffix}")
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn indian_group(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

fn normalize_sign(amount: i64) -> (&'static str, u64) {
    if amount >= 0 {
        ("", amount.unsigned_abs())
    } else {
        ("-", amount.unsigned_abs())
    }
}

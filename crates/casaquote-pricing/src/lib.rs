// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Interior cost estimation.
//!
//! An estimate prices a property two independent ways, once per selected
//! room and once per square foot of floor area, takes the larger of the two
//! and adds a flat miscellaneous surcharge on top.

use casaquote_app::validation::format_inr;
use casaquote_app::{Catalog, EstimateRequest, EstimateResult, RoomCost, RoomPriceTable};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Share of the base estimate added for finishing and miscellaneous work.
pub const MISC_SURCHARGE_RATE: f64 = 0.10;
/// Room whose price stands in for names with no match in the table.
pub const FALLBACK_ROOM: &str = "Bedroom";
/// Used only when the table has no `FALLBACK_ROOM` entry either.
pub const FALLBACK_BASE_PRICE: i64 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("invalid estimate input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("unknown property size {key:?} (expected one of: {expected})")]
    UnknownPropertySize { key: String, expected: String },
    #[error("unknown package {key:?} (expected one of: {expected})")]
    UnknownPackage { key: String, expected: String },
    #[error("area must be positive, got {area}")]
    NonPositiveArea { area: i64 },
    #[error("area {area} sq. ft prices beyond the representable range")]
    EstimateOutOfRange { area: i64 },
}

pub type Result<T> = std::result::Result<T, EstimateError>;

/// How a room's base price was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSource {
    Exact,
    /// Substring match against the named table key.
    Fuzzy { key: String },
    /// No match; the `FALLBACK_ROOM` entry was used.
    FallbackRoom,
    /// No match and no `FALLBACK_ROOM` entry.
    FallbackConstant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPrice {
    pub base_price: i64,
    pub source: PriceSource,
}

/// Exact name first, then the first table key (in table order) that
/// contains or is contained in the room name, then the fallbacks.
pub fn resolve_room_price(table: &RoomPriceTable, room: &str) -> RoomPrice {
    if let Some(base_price) = table.get(room) {
        return RoomPrice {
            base_price,
            source: PriceSource::Exact,
        };
    }

    if let Some(entry) = table
        .iter()
        .find(|entry| room.contains(entry.room.as_str()) || entry.room.contains(room))
    {
        return RoomPrice {
            base_price: entry.base_price,
            source: PriceSource::Fuzzy {
                key: entry.room.clone(),
            },
        };
    }

    match table.get(FALLBACK_ROOM) {
        Some(base_price) => RoomPrice {
            base_price,
            source: PriceSource::FallbackRoom,
        },
        None => RoomPrice {
            base_price: FALLBACK_BASE_PRICE,
            source: PriceSource::FallbackConstant,
        },
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(property = %request.property_size, package = %request.package)
)]
pub fn compute_estimate(catalog: &Catalog, request: &EstimateRequest) -> Result<EstimateResult> {
    let size = catalog
        .property_size(&request.property_size)
        .ok_or_else(|| InvalidInput::UnknownPropertySize {
            key: request.property_size.clone(),
            expected: catalog.property_size_keys().join(", "),
        })?;
    let package = catalog
        .package(&request.package)
        .ok_or_else(|| InvalidInput::UnknownPackage {
            key: request.package.clone(),
            expected: catalog.package_keys().join(", "),
        })?;

    let area = request.custom_area.unwrap_or(size.default_area);
    if area <= 0 {
        return Err(InvalidInput::NonPositiveArea { area }.into());
    }

    let out_of_range = || InvalidInput::EstimateOutOfRange { area };

    let mut room_breakdown = Vec::with_capacity(request.rooms.len());
    let mut room_total = 0i64;
    for room in request.rooms.iter() {
        let resolved = resolve_room_price(&catalog.room_prices, room);
        trace!(room, base_price = resolved.base_price, source = ?resolved.source, "resolved room price");
        let price = round_half_up(resolved.base_price as f64 * package.multiplier)
            .ok_or_else(out_of_range)?;
        room_total = room_total.checked_add(price).ok_or_else(out_of_range)?;
        room_breakdown.push(RoomCost {
            room: room.to_owned(),
            price,
        });
    }

    let area_cost = area as f64 * package.rate;
    let base_estimate = (room_total as f64).max(area_cost);
    let misc_cost =
        round_half_up(base_estimate * MISC_SURCHARGE_RATE).ok_or_else(out_of_range)?;
    let grand_total =
        round_half_up(base_estimate + misc_cost as f64).ok_or_else(out_of_range)?;
    let area_cost_rounded = round_half_up(area_cost).ok_or_else(out_of_range)?;
    let per_unit_area_rate =
        round_half_up(grand_total as f64 / area as f64).ok_or_else(out_of_range)?;

    debug!(
        area,
        room_total,
        area_cost,
        grand_total,
        "estimate computed"
    );

    Ok(EstimateResult {
        property_name: size.name.clone(),
        package_name: package.name.clone(),
        area,
        rate: package.rate,
        room_breakdown,
        room_total,
        area_cost: area_cost_rounded,
        misc_cost,
        grand_total,
        per_unit_area_rate,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickEstimate {
    pub property_label: String,
    pub package_name: String,
    pub estimated_cost: i64,
    pub per_unit_area_rate: i64,
    pub area: i64,
    pub formatted: String,
}

/// Headline figure for a category with its default rooms and area.
pub fn quick_estimate(catalog: &Catalog, property_size: &str, package: &str) -> Result<QuickEstimate> {
    let request = EstimateRequest::with_default_rooms(catalog, property_size, package);
    let result = compute_estimate(catalog, &request)?;
    Ok(QuickEstimate {
        property_label: property_size.trim().to_ascii_uppercase(),
        package_name: result.package_name,
        estimated_cost: result.grand_total,
        per_unit_area_rate: result.per_unit_area_rate,
        area: result.area,
        formatted: format_inr(result.grand_total),
    })
}

/// Chat text a visitor sends after pricing a selection.
pub fn share_message(result: &EstimateResult, business_name: &str) -> String {
    format!(
        "Hi {business_name}! I used your estimator and got a quote of {} for my {} ({} package). I'd like to discuss this further.",
        format_inr(result.grand_total),
        result.property_name,
        result.package_name.to_lowercase(),
    )
}

/// `None` when the rounded value does not fit in an `i64`.
fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    // 2^63 is exactly representable; i64::MAX is not.
    let limit = 9_223_372_036_854_775_808.0_f64;
    (rounded.is_finite() && rounded >= -limit && rounded < limit).then_some(rounded as i64)
}

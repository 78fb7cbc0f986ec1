// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use casaquote_app::Catalog;
use casaquote_app::validation::{AreaBounds, MIN_PHONE_DIGITS, validate_phone};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_NAME: &str = "casaquote";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_PROPERTY: &str = "2bhk";
const DEFAULT_PACKAGE: &str = "premium";
const DEFAULT_BUSINESS_NAME: &str = "CasaQuote Interiors";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub estimator: Estimator,
    #[serde(default)]
    pub contact: Contact,
    /// Extra room base prices, appended after the built-in table.
    #[serde(default)]
    pub rooms: BTreeMap<String, i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            estimator: Estimator::default(),
            contact: Contact::default(),
            rooms: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Estimator {
    pub default_property: Option<String>,
    pub default_package: Option<String>,
    pub min_area: Option<i64>,
    pub max_area: Option<i64>,
}

impl Default for Estimator {
    fn default() -> Self {
        let bounds = AreaBounds::default();
        Self {
            default_property: Some(DEFAULT_PROPERTY.to_owned()),
            default_package: Some(DEFAULT_PACKAGE.to_owned()),
            min_area: Some(bounds.min),
            max_area: Some(bounds.max),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub whatsapp_phone: Option<String>,
    pub business_name: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("CASAQUOTE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!(
                "cannot resolve config directory; set CASAQUOTE_CONFIG_PATH to the config file"
            )
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found; using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [estimator], [contact], and [rooms]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        debug!(
            path = %path.display(),
            extra_rooms = config.rooms.len(),
            "config loaded"
        );
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        let builtin = Catalog::builtin();

        if let Some(key) = &self.estimator.default_property
            && builtin.property_size(key).is_none()
        {
            bail!(
                "estimator.default_property in {} is {key:?}; expected one of: {}",
                path.display(),
                builtin.property_size_keys().join(", ")
            );
        }

        if let Some(key) = &self.estimator.default_package
            && builtin.package(key).is_none()
        {
            bail!(
                "estimator.default_package in {} is {key:?}; expected one of: {}",
                path.display(),
                builtin.package_keys().join(", ")
            );
        }

        let bounds = self.area_bounds();
        if bounds.min <= 0 {
            bail!(
                "estimator.min_area in {} must be positive, got {}",
                path.display(),
                bounds.min
            );
        }
        if bounds.min > bounds.max {
            bail!(
                "estimator.min_area ({}) in {} exceeds estimator.max_area ({})",
                bounds.min,
                path.display(),
                bounds.max
            );
        }

        for (room, base_price) in &self.rooms {
            if room.trim().is_empty() {
                bail!("[rooms] in {} has a blank room name", path.display());
            }
            if builtin.room_prices.contains(room) {
                bail!(
                    "[rooms] in {} redefines built-in room {room:?}; use a new room name",
                    path.display()
                );
            }
            if *base_price <= 0 {
                bail!(
                    "rooms.{room:?} in {} must be positive, got {base_price}",
                    path.display()
                );
            }
        }

        if let Some(phone) = &self.contact.whatsapp_phone
            && validate_phone(phone).is_err()
        {
            bail!(
                "contact.whatsapp_phone in {} must be digits with optional +, spaces or dashes (at least {MIN_PHONE_DIGITS} digits), got {phone:?}",
                path.display()
            );
        }

        Ok(())
    }

    pub fn default_property(&self) -> &str {
        self.estimator
            .default_property
            .as_deref()
            .unwrap_or(DEFAULT_PROPERTY)
    }

    pub fn default_package(&self) -> &str {
        self.estimator
            .default_package
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE)
    }

    pub fn area_bounds(&self) -> AreaBounds {
        let defaults = AreaBounds::default();
        AreaBounds::new(
            self.estimator.min_area.unwrap_or(defaults.min),
            self.estimator.max_area.unwrap_or(defaults.max),
        )
    }

    /// Built-in catalog with the `[rooms]` entries appended in key order.
    pub fn catalog(&self) -> Catalog {
        Catalog::builtin().clone().with_room_prices(
            self.rooms
                .iter()
                .map(|(room, base_price)| (room.clone(), *base_price)),
        )
    }

    pub fn whatsapp_phone(&self) -> Option<&str> {
        self.contact
            .whatsapp_phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }

    pub fn business_name(&self) -> &str {
        self.contact
            .business_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_BUSINESS_NAME)
    }

    pub fn example_config(path: &Path) -> String {
        let bounds = AreaBounds::default();
        format!(
            "# casaquote config\n# Place this file at: {}\n\nversion = 1\n\n[estimator]\ndefault_property = \"{}\"\ndefault_package = \"{}\"\nmin_area = {}\nmax_area = {}\n\n[contact]\n# Number used for WhatsApp links, with country code.\n# whatsapp_phone = \"+91 98765 43210\"\nbusiness_name = \"{}\"\n\n[rooms]\n# Extra rooms priced at package multiplier 1.0.\n# \"Home Theatre\" = 90000\n",
            path.display(),
            DEFAULT_PROPERTY,
            DEFAULT_PACKAGE,
            bounds.min,
            bounds.max,
            DEFAULT_BUSINESS_NAME,
        )
    }
}

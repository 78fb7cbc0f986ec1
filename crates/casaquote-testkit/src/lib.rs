// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use casaquote_app::validation::AreaBounds;
use casaquote_app::{Catalog, EstimateRequest, RoomPriceTable};
use std::path::PathBuf;

/// Room names that are not catalog keys, exercising substring matching and
/// the fallbacks.
const ODD_ROOMS: [&str; 8] = [
    "Guest Bedroom 2",
    "Kids Study Room",
    "Kitchen Island",
    "Sauna",
    "Home Theatre",
    "Utility",
    "Servant Quarter",
    "Powder Bathroom",
];

/// The documented 1 BHK essential scenario and its expected figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub request: EstimateRequest,
    pub room_total: i64,
    pub area_cost: i64,
    pub misc_cost: i64,
    pub grand_total: i64,
    pub per_unit_area_rate: i64,
}

pub fn one_bhk_essential_scenario() -> Scenario {
    Scenario {
        request: EstimateRequest::new("1bhk", "essential").rooms([
            "Living Room",
            "Bedroom",
            "Kitchen",
            "Bathroom",
        ]),
        room_total: 295_000,
        area_cost: 990_000,
        misc_cost: 99_000,
        grand_total: 1_089_000,
        per_unit_area_rate: 1980,
    }
}

/// 2 BHK premium with its default rooms and default area.
pub fn two_bhk_premium_scenario() -> Scenario {
    Scenario {
        request: EstimateRequest::with_default_rooms(Catalog::builtin(), "2bhk", "premium"),
        room_total: 560_000,
        area_cost: 2_375_000,
        misc_cost: 237_500,
        grand_total: 2_612_500,
        per_unit_area_rate: 2750,
    }
}

/// Built-in catalog with the room table swapped out. Useful for pinning the
/// fallback behavior when the table has no `Bedroom` entry.
pub fn catalog_with_rooms<I, S>(rooms: I) -> Catalog
where
    I: IntoIterator<Item = (S, i64)>,
    S: Into<String>,
{
    Catalog {
        room_prices: RoomPriceTable::new(rooms),
        ..Catalog::builtin().clone()
    }
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of well-formed estimate requests against a catalog.
#[derive(Debug, Clone)]
pub struct RequestFaker {
    rng: DeterministicRng,
    bounds: AreaBounds,
}

impl RequestFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            bounds: AreaBounds::default(),
        }
    }

    pub fn request(&mut self, catalog: &Catalog) -> EstimateRequest {
        let size = &catalog.property_sizes[self.rng.int_n(catalog.property_sizes.len())];
        let package = &catalog.packages[self.rng.int_n(catalog.packages.len())];
        let mut request = EstimateRequest::new(size.key.clone(), package.key.clone());

        for room in &size.default_rooms {
            if self.rng.int_n(4) != 0 {
                request.rooms.insert(room.clone());
            }
        }
        for room in &catalog.additional_rooms {
            if self.rng.bool() {
                request.rooms.insert(room.clone());
            }
        }
        if self.rng.int_n(3) == 0 {
            request.rooms.insert(ODD_ROOMS[self.rng.int_n(ODD_ROOMS.len())]);
        }

        if self.rng.bool() {
            let span = (self.bounds.max - self.bounds.min) as usize;
            request.custom_area = Some(self.bounds.min + self.rng.int_n(span + 1) as i64);
        }
        request
    }

    pub fn requests(&mut self, catalog: &Catalog, count: usize) -> Vec<EstimateRequest> {
        (0..count).map(|_| self.request(catalog)).collect()
    }
}

pub fn odd_rooms() -> &'static [&'static str] {
    &ODD_ROOMS
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::LazyLock;

use crate::{Catalog, PackageTier, PropertySizeCategory, RoomPriceTable};

const PROPERTY_SIZES: [(&str, &str, i64, i64, &[&str]); 3] = [
    (
        "1bhk",
        "1 BHK",
        550,
        350_000,
        &["Living Room", "Bedroom", "Kitchen", "Bathroom"],
    ),
    (
        "2bhk",
        "2 BHK",
        950,
        550_000,
        &[
            "Living Room",
            "Master Bedroom",
            "Bedroom 2",
            "Kitchen",
            "Bathroom 1",
            "Bathroom 2",
        ],
    ),
    (
        "3bhk",
        "3 BHK",
        1400,
        850_000,
        &[
            "Living Room",
            "Master Bedroom",
            "Bedroom 2",
            "Bedroom 3",
            "Kitchen",
            "Bathroom 1",
            "Bathroom 2",
            "Bathroom 3",
        ],
    ),
];

struct TierSpec {
    key: &'static str,
    name: &'static str,
    rate: f64,
    multiplier: f64,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PACKAGE_TIERS: [TierSpec; 3] = [
    TierSpec {
        key: "essential",
        name: "Essential",
        rate: 1800.0,
        multiplier: 1.0,
        description: "Quality materials with functional design",
        features: &[
            "Basic modular furniture",
            "Standard finishes",
            "Essential lighting",
            "1-year warranty",
        ],
        popular: false,
    },
    TierSpec {
        key: "premium",
        name: "Premium",
        rate: 2500.0,
        multiplier: 1.4,
        description: "Premium materials with elegant design",
        features: &[
            "Premium modular furniture",
            "Designer finishes",
            "Accent lighting",
            "False ceiling",
            "2-year warranty",
        ],
        popular: true,
    },
    TierSpec {
        key: "luxury",
        name: "Luxury",
        rate: 3500.0,
        multiplier: 1.95,
        description: "Luxury materials with bespoke design",
        features: &[
            "Luxury custom furniture",
            "Imported finishes",
            "Smart lighting",
            "Full false ceiling",
            "Home automation ready",
            "3-year warranty",
        ],
        popular: false,
    },
];

const ROOM_PRICES: [(&str, i64); 15] = [
    ("Living Room", 80_000),
    ("Master Bedroom", 75_000),
    ("Bedroom", 60_000),
    ("Bedroom 2", 60_000),
    ("Bedroom 3", 55_000),
    ("Kitchen", 120_000),
    ("Modular Kitchen", 150_000),
    ("Bathroom", 35_000),
    ("Bathroom 1", 35_000),
    ("Bathroom 2", 30_000),
    ("Bathroom 3", 30_000),
    ("Wardrobe", 45_000),
    ("Study Room", 50_000),
    ("Pooja Room", 40_000),
    ("Balcony", 25_000),
];

const ADDITIONAL_ROOMS: [&str; 4] = ["Wardrobe", "Study Room", "Pooja Room", "Balcony"];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(build_builtin);

impl Catalog {
    /// Reference data compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

fn build_builtin() -> Catalog {
    let property_sizes = PROPERTY_SIZES
        .iter()
        .map(|(key, name, default_area, base_price, rooms)| PropertySizeCategory {
            key: (*key).to_owned(),
            name: (*name).to_owned(),
            default_area: *default_area,
            default_rooms: rooms.iter().map(|room| (*room).to_owned()).collect(),
            base_price: *base_price,
        })
        .collect();

    let packages = PACKAGE_TIERS
        .iter()
        .map(|tier| PackageTier {
            key: tier.key.to_owned(),
            name: tier.name.to_owned(),
            rate: tier.rate,
            multiplier: tier.multiplier,
            description: tier.description.to_owned(),
            features: tier
                .features
                .iter()
                .map(|feature| (*feature).to_owned())
                .collect(),
            popular: tier.popular,
        })
        .collect();

    Catalog {
        property_sizes,
        packages,
        room_prices: RoomPriceTable::new(ROOM_PRICES),
        additional_rooms: ADDITIONAL_ROOMS
            .iter()
            .map(|room| (*room).to_owned())
            .collect(),
    }
}

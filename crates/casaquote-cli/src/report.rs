// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use casaquote_app::validation::{format_compact_inr, format_inr};
use casaquote_app::{Catalog, EstimateResult};
use casaquote_pricing::QuickEstimate;

const LABEL_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 14;

fn row(label: &str, amount: i64) -> String {
    format!(
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_inr(amount)
    )
}

fn per_sq_ft(rate: f64) -> String {
    format!("{}/sq. ft", format_inr(rate.round() as i64))
}

pub fn render_estimate(result: &EstimateResult) -> String {
    let mut lines = vec![
        format!("{} | {} package", result.property_name, result.package_name),
        format!("Area: {} sq. ft at {}", result.area, per_sq_ft(result.rate)),
        String::new(),
    ];

    if result.room_breakdown.is_empty() {
        lines.push("Rooms: none selected".to_owned());
    } else {
        lines.push("Rooms:".to_owned());
        lines.extend(
            result
                .room_breakdown
                .iter()
                .map(|cost| row(&cost.room, cost.price)),
        );
    }

    lines.push(String::new());
    lines.push(row("Room total", result.room_total));
    lines.push(row("Area cost", result.area_cost));
    lines.push(row("Misc (10%)", result.misc_cost));
    lines.push(row("Grand total", result.grand_total));
    lines.push(row("Per sq. ft", result.per_unit_area_rate));
    lines.join("\n") + "\n"
}

pub fn render_quick(quick: &QuickEstimate) -> String {
    format!(
        "{} {}: {} ({} over {} sq. ft)\n",
        quick.property_label,
        quick.package_name,
        quick.formatted,
        per_sq_ft(quick.per_unit_area_rate as f64),
        quick.area,
    )
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut lines = vec!["Property sizes:".to_owned()];
    for size in &catalog.property_sizes {
        lines.push(format!(
            "  {:<6}{} | {} sq. ft | from {}",
            size.key,
            size.name,
            size.default_area,
            format_compact_inr(size.base_price)
        ));
        lines.push(format!("        rooms: {}", size.default_rooms.join(", ")));
    }

    lines.push(String::new());
    lines.push("Packages:".to_owned());
    for package in &catalog.packages {
        let marker = if package.popular { " (most popular)" } else { "" };
        lines.push(format!(
            "  {:<10}{}{marker} | {} | room multiplier x{}",
            package.key,
            package.name,
            per_sq_ft(package.rate),
            package.multiplier
        ));
        lines.push(format!("            {}", package.description));
        for feature in &package.features {
            lines.push(format!("            - {feature}"));
        }
    }

    lines.push(String::new());
    lines.push("Room base prices:".to_owned());
    lines.extend(
        catalog
            .room_prices
            .iter()
            .map(|entry| row(&entry.room, entry.base_price)),
    );

    if !catalog.additional_rooms.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Optional rooms: {}",
            catalog.additional_rooms.join(", ")
        ));
    }
    lines.join("\n") + "\n"
}

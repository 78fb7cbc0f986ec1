// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Catalog keys are matched case-insensitively with surrounding whitespace
/// ignored, so `" 2BHK "` names the `2bhk` category.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySizeCategory {
    pub key: String,
    pub name: String,
    pub default_area: i64,
    pub default_rooms: Vec<String>,
    /// Marketing reference price. The calculator never reads it.
    pub base_price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTier {
    pub key: String,
    pub name: String,
    /// Currency per sq. ft.
    pub rate: f64,
    /// Applied to room base prices; 1.0 for the entry tier.
    pub multiplier: f64,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPriceEntry {
    pub room: String,
    pub base_price: i64,
}

/// Room base prices in declaration order. Lookups that fall back to
/// substring matching walk the entries in this order, so the order is part
/// of the pricing behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RoomPriceTable {
    entries: Vec<RoomPriceEntry>,
}

impl RoomPriceTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (room, base_price) in entries {
            table.insert(room, base_price);
        }
        table
    }

    /// Replaces the price of an existing room in place, otherwise appends.
    pub fn insert(&mut self, room: impl Into<String>, base_price: i64) {
        let room = room.into();
        match self.entries.iter_mut().find(|entry| entry.room == room) {
            Some(entry) => entry.base_price = base_price,
            None => self.entries.push(RoomPriceEntry { room, base_price }),
        }
    }

    pub fn get(&self, room: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.room == room)
            .map(|entry| entry.base_price)
    }

    pub fn contains(&self, room: &str) -> bool {
        self.get(room).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomPriceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub property_sizes: Vec<PropertySizeCategory>,
    pub packages: Vec<PackageTier>,
    pub room_prices: RoomPriceTable,
    /// Rooms offered for opt-in on top of a category's defaults.
    pub additional_rooms: Vec<String>,
}

impl Catalog {
    pub fn property_size(&self, key: &str) -> Option<&PropertySizeCategory> {
        let key = normalize_key(key);
        self.property_sizes.iter().find(|size| size.key == key)
    }

    pub fn package(&self, key: &str) -> Option<&PackageTier> {
        let key = normalize_key(key);
        self.packages.iter().find(|package| package.key == key)
    }

    pub fn popular_package(&self) -> Option<&PackageTier> {
        self.packages.iter().find(|package| package.popular)
    }

    pub fn property_size_keys(&self) -> Vec<&str> {
        self.property_sizes
            .iter()
            .map(|size| size.key.as_str())
            .collect()
    }

    pub fn package_keys(&self) -> Vec<&str> {
        self.packages
            .iter()
            .map(|package| package.key.as_str())
            .collect()
    }

    /// Appends room prices after the existing table. Names already present
    /// keep their position and take the new price.
    pub fn with_room_prices<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        for (room, base_price) in rooms {
            self.room_prices.insert(room, base_price);
        }
        self
    }
}

/// Ordered set of room names. Duplicates collapse onto the first insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RoomSelection {
    rooms: Vec<String>,
}

impl RoomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the room was already selected.
    pub fn insert(&mut self, room: impl Into<String>) -> bool {
        let room = room.into();
        if self.contains(&room) {
            return false;
        }
        self.rooms.push(room);
        true
    }

    pub fn remove(&mut self, room: &str) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|selected| selected != room);
        self.rooms.len() != before
    }

    /// Flips membership and reports whether the room is selected afterwards.
    pub fn toggle(&mut self, room: &str) -> bool {
        if self.remove(room) {
            return false;
        }
        self.rooms.push(room.to_owned());
        true
    }

    pub fn contains(&self, room: &str) -> bool {
        self.rooms.iter().any(|selected| selected == room)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn joined(&self, separator: &str) -> String {
        self.rooms.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for RoomSelection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Self::new();
        for room in iter {
            selection.insert(room);
        }
        selection
    }
}

impl From<Vec<String>> for RoomSelection {
    fn from(rooms: Vec<String>) -> Self {
        rooms.into_iter().collect()
    }
}

impl From<RoomSelection> for Vec<String> {
    fn from(selection: RoomSelection) -> Self {
        selection.rooms
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub property_size: String,
    pub custom_area: Option<i64>,
    pub rooms: RoomSelection,
    pub package: String,
}

impl EstimateRequest {
    pub fn new(property_size: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            property_size: property_size.into(),
            custom_area: None,
            rooms: RoomSelection::new(),
            package: package.into(),
        }
    }

    /// Starts from the category's default rooms, the way the estimator page
    /// resets its selection whenever a category is picked. An unknown
    /// category yields an empty selection and is rejected at calculation.
    pub fn with_default_rooms(
        catalog: &Catalog,
        property_size: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        let mut request = Self::new(property_size, package);
        if let Some(size) = catalog.property_size(&request.property_size) {
            request.rooms = size.default_rooms.iter().cloned().collect();
        }
        request
    }

    pub fn custom_area(mut self, area: i64) -> Self {
        self.custom_area = Some(area);
        self
    }

    pub fn rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = rooms.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCost {
    pub room: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub property_name: String,
    pub package_name: String,
    pub area: i64,
    pub rate: f64,
    pub room_breakdown: Vec<RoomCost>,
    pub room_total: i64,
    pub area_cost: i64,
    pub misc_cost: i64,
    pub grand_total: i64,
    pub per_unit_area_rate: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormKind {
    EstimateEnquiry,
    GeneralEnquiry,
    Newsletter,
}

impl FormKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EstimateEnquiry => "estimate_enquiry",
            Self::GeneralEnquiry => "general_enquiry",
            Self::Newsletter => "newsletter",
        }
    }

    /// Backend path the payload is posted to, relative to the API base.
    pub const fn submission_path(self) -> &'static str {
        match self {
            Self::EstimateEnquiry => "/estimations/enquiry",
            Self::GeneralEnquiry => "/enquiries",
            Self::Newsletter => "/newsletter/subscribe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[serde(rename = "1bhk")]
    OneBhk,
    #[serde(rename = "2bhk")]
    TwoBhk,
    #[serde(rename = "3bhk")]
    ThreeBhk,
    #[serde(rename = "4bhk")]
    FourPlusBhk,
    Villa,
    Office,
    Commercial,
}

impl PropertyType {
    pub const ALL: [Self; 7] = [
        Self::OneBhk,
        Self::TwoBhk,
        Self::ThreeBhk,
        Self::FourPlusBhk,
        Self::Villa,
        Self::Office,
        Self::Commercial,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneBhk => "1bhk",
            Self::TwoBhk => "2bhk",
            Self::ThreeBhk => "3bhk",
            Self::FourPlusBhk => "4bhk",
            Self::Villa => "villa",
            Self::Office => "office",
            Self::Commercial => "commercial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalize_key(value))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneBhk => "1 BHK Apartment",
            Self::TwoBhk => "2 BHK Apartment",
            Self::ThreeBhk => "3 BHK Apartment",
            Self::FourPlusBhk => "4+ BHK Apartment",
            Self::Villa => "Villa / House",
            Self::Office => "Office Space",
            Self::Commercial => "Commercial Space",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetBand {
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10-20")]
    TenToTwenty,
    #[serde(rename = "20-35")]
    TwentyToThirtyFive,
    #[serde(rename = "35+")]
    AboveThirtyFive,
}

impl BudgetBand {
    pub const ALL: [Self; 5] = [
        Self::ThreeToFive,
        Self::FiveToTen,
        Self::TenToTwenty,
        Self::TwentyToThirtyFive,
        Self::AboveThirtyFive,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreeToFive => "3-5",
            Self::FiveToTen => "5-10",
            Self::TenToTwenty => "10-20",
            Self::TwentyToThirtyFive => "20-35",
            Self::AboveThirtyFive => "35+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|band| band.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeToFive => "₹3 - 5 Lakhs",
            Self::FiveToTen => "₹5 - 10 Lakhs",
            Self::TenToTwenty => "₹10 - 20 Lakhs",
            Self::TwentyToThirtyFive => "₹20 - 35 Lakhs",
            Self::AboveThirtyFive => "₹35 Lakhs+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Complete,
    LivingRoom,
    Bedroom,
    Kitchen,
    Wardrobe,
    Office,
    Renovation,
    Consultation,
}

impl ServiceKind {
    pub const ALL: [Self; 8] = [
        Self::Complete,
        Self::LivingRoom,
        Self::Bedroom,
        Self::Kitchen,
        Self::Wardrobe,
        Self::Office,
        Self::Renovation,
        Self::Consultation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::LivingRoom => "living-room",
            Self::Bedroom => "bedroom",
            Self::Kitchen => "kitchen",
            Self::Wardrobe => "wardrobe",
            Self::Office => "office",
            Self::Renovation => "renovation",
            Self::Consultation => "consultation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalize_key(value))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete Home Interior",
            Self::LivingRoom => "Living Room Design",
            Self::Bedroom => "Bedroom Design",
            Self::Kitchen => "Modular Kitchen",
            Self::Wardrobe => "Wardrobe Design",
            Self::Office => "Office Interiors",
            Self::Renovation => "Renovation",
            Self::Consultation => "Design Consultation Only",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BudgetBand, EstimateRequest, PropertyType, RoomPriceTable, RoomSelection, ServiceKind,
        normalize_key,
    };

    #[test]
    fn room_selection_collapses_duplicates_and_keeps_order() {
        let selection: RoomSelection = ["Kitchen", "Bedroom", "Kitchen", "Balcony"]
            .into_iter()
            .collect();
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["Kitchen", "Bedroom", "Balcony"]
        );
    }

    #[test]
    fn room_selection_toggle_appends_then_removes() {
        let mut selection: RoomSelection = ["Living Room", "Kitchen"].into_iter().collect();

        assert!(!selection.toggle("Living Room"));
        assert!(selection.toggle("Living Room"));
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["Kitchen", "Living Room"]
        );
    }

    #[test]
    fn room_selection_deserializes_through_dedup() {
        let selection: RoomSelection =
            serde_json::from_str(r#"["Wardrobe","Wardrobe","Balcony"]"#)
                .expect("selection should parse");
        assert_eq!(selection.len(), 2);
        assert_eq!(
            serde_json::to_string(&selection).expect("selection should serialize"),
            r#"["Wardrobe","Balcony"]"#
        );
    }

    #[test]
    fn room_price_table_insert_replaces_in_place() {
        let mut table = RoomPriceTable::new([("Kitchen", 100), ("Balcony", 50)]);
        table.insert("Kitchen", 120);
        table.insert("Terrace", 70);

        let rooms = table
            .iter()
            .map(|entry| (entry.room.as_str(), entry.base_price))
            .collect::<Vec<_>>();
        assert_eq!(rooms, vec![("Kitchen", 120), ("Balcony", 50), ("Terrace", 70)]);
    }

    #[test]
    fn normalize_key_trims_and_lowercases() {
        assert_eq!(normalize_key("  2BHK "), "2bhk");
        assert_eq!(normalize_key("Premium"), "premium");
    }

    #[test]
    fn request_builder_sets_area_and_rooms() {
        let request = EstimateRequest::new("2bhk", "premium")
            .custom_area(1200)
            .rooms(["Kitchen", "Kitchen"]);
        assert_eq!(request.custom_area, Some(1200));
        assert_eq!(request.rooms.len(), 1);
    }

    #[test]
    fn enquiry_option_values_parse() {
        assert_eq!(PropertyType::parse("Villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::parse("4bhk"), Some(PropertyType::FourPlusBhk));
        assert_eq!(BudgetBand::parse("35+"), Some(BudgetBand::AboveThirtyFive));
        assert_eq!(BudgetBand::parse("35"), None);
        assert_eq!(ServiceKind::parse("living-room"), Some(ServiceKind::LivingRoom));
        assert_eq!(ServiceKind::parse("garage"), None);
    }

    #[test]
    fn enquiry_options_serialize_as_site_values() {
        assert_eq!(
            serde_json::to_string(&PropertyType::OneBhk).expect("serialize property type"),
            r#""1bhk""#
        );
        assert_eq!(
            serde_json::to_string(&BudgetBand::TenToTwenty).expect("serialize budget band"),
            r#""10-20""#
        );
        assert_eq!(
            serde_json::to_string(&ServiceKind::LivingRoom).expect("serialize service"),
            r#""living-room""#
        );
    }
}

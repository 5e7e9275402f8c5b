// src/domain/listing.rs

use crate::scraper::models::RawListing;

/// One listing flattened into the fixed spreadsheet columns.
///
/// Every column is always present. A key the API left out becomes `None`
/// instead of shifting the following columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRow {
    pub url: Option<String>,
    pub rooms: Option<i64>,
    pub room_configuration: Option<String>,
    /// Raw, currency-formatted price as the API sent it.
    pub price: Option<String>,
    pub published: Option<String>,
    pub size: Option<f64>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub build_year: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ListingRow {
    pub const COLUMNS: [&'static str; 12] = [
        "url",
        "rooms",
        "roomConfiguration",
        "price",
        "published",
        "size",
        "address",
        "district",
        "city",
        "buildYear",
        "latitude",
        "longitude",
    ];

    pub fn from_raw(raw: &RawListing) -> Self {
        let building = raw.building_data.as_ref();
        let coords = raw.coordinates.as_ref();

        ListingRow {
            url: raw.url.clone(),
            rooms: raw.rooms,
            room_configuration: raw.room_configuration.clone(),
            price: raw.price.clone(),
            published: raw.published.clone(),
            size: raw.size,
            address: building.and_then(|b| b.address.clone()),
            district: building.and_then(|b| b.district.clone()),
            city: building.and_then(|b| b.city.clone()),
            build_year: building.and_then(|b| b.year),
            latitude: coords.and_then(|c| c.latitude),
            longitude: coords.and_then(|c| c.longitude),
        }
    }

    /// Both coordinates, or nothing.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Used in log and error messages.
    pub fn label(&self) -> String {
        self.url
            .clone()
            .or_else(|| self.address.clone())
            .unwrap_or_else(|| "<unknown listing>".to_string())
    }
}

pub fn normalize_listings(cards: &[RawListing]) -> Vec<ListingRow> {
    cards.iter().map(ListingRow::from_raw).collect()
}

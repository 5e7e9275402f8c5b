use serde::Deserialize;

// response
//  ├── found
//  └── cards[]
//       ├── url
//       ├── rooms
//       ├── roomConfiguration
//       ├── price            "1 200 €/kk"
//       ├── published
//       ├── size
//       ├── buildingData
//       │    ├── address
//       │    ├── district
//       │    ├── city
//       │    └── year
//       └── coordinates
//            ├── latitude
//            └── longitude
//
// Keys not listed here are dropped during deserialization.

#[derive(Debug, Deserialize)]
pub struct CardsResponse {
    /// Total number of cards matching the query, which may exceed `cards.len()`.
    pub found: Option<u64>,
    #[serde(default)]
    pub cards: Vec<RawListing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub url: Option<String>,
    pub rooms: Option<i64>,
    pub room_configuration: Option<String>,
    pub price: Option<String>,
    pub published: Option<String>,
    pub size: Option<f64>,
    pub building_data: Option<BuildingData>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuildingData {
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

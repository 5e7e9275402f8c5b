use crate::config::Settings;
use crate::scraper::models::RawListing;
use std::path::Path;

/// Settings that write every output under `dir`.
pub fn settings_in(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.output.map_path = dir.join("asunnot.html");
    settings.output.xlsx_path = dir.join("asunnot.xlsx");
    settings
}

/// Cards as the API returns them, so fixtures go through deserialization.
pub fn cards_from_json(json: &str) -> Vec<RawListing> {
    crate::scraper::client::parse_cards(json)
        .unwrap_or_else(|e| panic!("fixture did not parse: {e}"))
        .cards
}

/// A priced card with coordinates; `n` keeps urls distinct.
pub fn card(n: usize, price: &str, size: f64) -> String {
    format!(
        r#"{{"url": "https://asunnot.oikotie.fi/vuokra-asunnot/helsinki/{n}",
            "rooms": 2, "roomConfiguration": "2h+k", "price": "{price}",
            "published": "2024-03-0{d}", "size": {size},
            "buildingData": {{"address": "Testikatu {n}", "district": "Kallio",
                              "city": "Helsinki", "year": 1960}},
            "coordinates": {{"latitude": 60.18{n}, "longitude": 24.95{n}}}}}"#,
        d = n % 9 + 1
    )
}

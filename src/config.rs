// config.rs
use crate::errors::PipelineError;
use crate::scraper::MAX_CARDS;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Everything a run needs. Defaults reproduce the Helsinki rental search;
/// a JSON file can override any subset of fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchFilter,
    pub endpoints: Endpoints,
    pub output: OutputSettings,
    pub map: MapSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: u64,
    pub level: u8,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// 101 for rentals, 100 for sale.
    pub card_type: u32,
    pub locations: Vec<Location>,
    pub room_counts: Vec<u8>,
    pub price_min: u32,
    pub price_max: u32,
    pub size_min: u32,
    pub size_max: u32,
    pub construction_year_max: u32,
    pub sort_by: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub page_url: String,
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub map_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub write_xlsx: bool,
    pub transit_stops_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub center: [f64; 2],
    pub zoom: u8,
    pub palette: Palette,
    /// Transit network codes to draw. Empty draws every stop.
    pub transit_networks: Vec<u32>,
}

/// Quintile label to marker color. Labels outside 0..=4 get `fallback`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub quintiles: Vec<String>,
    pub fallback: String,
}

impl Palette {
    pub fn color_for(&self, quintile: u8) -> &str {
        self.quintiles
            .get(quintile as usize)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            quintiles: ["lightgreen", "green", "orange", "salmon", "red"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            fallback: "black".to_string(),
        }
    }
}

const DEFAULT_LOCATIONS: &[(u64, &str)] = &[
    (14694, "00100, Helsinki"),
    (14695, "00120, Helsinki"),
    (14696, "00130, Helsinki"),
    (14697, "00140, Helsinki"),
    (14698, "00150, Helsinki"),
    (14699, "00160, Helsinki"),
    (14700, "00170, Helsinki"),
    (14701, "00180, Helsinki"),
    (5079889, "00220, Helsinki"),
    (14705, "00250, Helsinki"),
    (14706, "00260, Helsinki"),
    (14709, "00290, Helsinki"),
    (14725, "00500, Helsinki"),
    (14726, "00510, Helsinki"),
    (14728, "00530, Helsinki"),
    (5079937, "00540, Helsinki"),
    (14729, "00550, Helsinki"),
    (14732, "00580, Helsinki"),
];

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            card_type: 101,
            locations: DEFAULT_LOCATIONS
                .iter()
                .map(|(id, name)| Location {
                    id: *id,
                    level: 5,
                    name: name.to_string(),
                })
                .collect(),
            room_counts: vec![2, 3, 4],
            price_min: 800,
            price_max: 1500,
            size_min: 55,
            size_max: 250,
            construction_year_max: 2023,
            sort_by: "published_sort_desc".to_string(),
            limit: MAX_CARDS,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            page_url: "https://asunnot.oikotie.fi/vuokra-asunnot".to_string(),
            api_url: "https://asunnot.oikotie.fi/api/cards".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("asunnot.html"),
            xlsx_path: PathBuf::from("asunnot.xlsx"),
            write_xlsx: true,
            transit_stops_path: None,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: [60.1868, 24.933],
            zoom: 12,
            palette: Palette::default(),
            transit_networks: Vec::new(),
        }
    }
}

impl SearchFilter {
    /// The API takes locations as a JSON array string: `[[id,level,"name"],...]`.
    pub fn locations_param(&self) -> String {
        let triples: Vec<serde_json::Value> = self
            .locations
            .iter()
            .map(|l| serde_json::json!([l.id, l.level, l.name]))
            .collect();
        serde_json::Value::Array(triples).to_string()
    }
}

impl Settings {
    /// Defaults, overlaid with the JSON file at `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        let settings = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    PipelineError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                serde_json::from_str(&text).map_err(|e| {
                    PipelineError::Config(format!("invalid {}: {e}", path.display()))
                })?
            }
            None => Settings::default(),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        let s = &self.search;

        if s.price_min > s.price_max {
            return Err(PipelineError::Config(format!(
                "price_min {} exceeds price_max {}",
                s.price_min, s.price_max
            )));
        }
        if s.size_min > s.size_max {
            return Err(PipelineError::Config(format!(
                "size_min {} exceeds size_max {}",
                s.size_min, s.size_max
            )));
        }
        if s.limit == 0 || s.limit > MAX_CARDS {
            return Err(PipelineError::Config(format!(
                "limit must be within 1..={MAX_CARDS}, got {}",
                s.limit
            )));
        }
        if s.locations.is_empty() {
            return Err(PipelineError::Config("no search locations".into()));
        }
        if self.map.palette.quintiles.len() != 5 {
            return Err(PipelineError::Config(format!(
                "palette needs 5 quintile colors, got {}",
                self.map.palette.quintiles.len()
            )));
        }

        for url in [&self.endpoints.page_url, &self.endpoints.api_url] {
            Url::parse(url).map_err(|e| PipelineError::Config(format!("bad url {url}: {e}")))?;
        }

        Ok(())
    }
}

use crate::config::MapSettings;
use crate::domain::RankedListing;
use crate::templates::components::{legend, listing_popup};
use crate::templates::layouts::map::map_layout;
use crate::transit::TransitStop;
use maud::{Markup, PreEscaped};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub color: String,
    pub popup: String,
}

#[derive(Debug, Serialize)]
struct StopPoint {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
struct View {
    center: [f64; 2],
    zoom: u8,
}

pub struct MapDocument {
    pub markup: Markup,
    pub markers: usize,
    /// Listings left off the map because they had no coordinates.
    pub skipped: usize,
}

pub struct MapInput<'a> {
    pub listings: &'a [RankedListing],
    pub stops: &'a [TransitStop],
    pub mean_rent: Option<f64>,
    pub generated: &'a str,
}

/// One marker per listing that has both coordinates, colored by quintile.
pub fn listing_markers(listings: &[RankedListing], settings: &MapSettings) -> (Vec<MapMarker>, usize) {
    let mut skipped = 0;
    let markers = listings
        .iter()
        .filter_map(|listing| match listing.row.position() {
            Some((lat, lon)) => Some(MapMarker {
                lat,
                lon,
                color: settings.palette.color_for(listing.quintile).to_string(),
                popup: listing_popup(listing).into_string(),
            }),
            None => {
                tracing::warn!(listing = %listing.row.label(), "no coordinates, not drawn");
                skipped += 1;
                None
            }
        })
        .collect();
    (markers, skipped)
}

pub fn render_map(input: &MapInput, settings: &MapSettings) -> MapDocument {
    let (markers, skipped) = listing_markers(input.listings, settings);
    let stops: Vec<StopPoint> = input
        .stops
        .iter()
        .map(|s| StopPoint {
            lat: s.latitude,
            lon: s.longitude,
        })
        .collect();
    let view = View {
        center: settings.center,
        zoom: settings.zoom,
    };

    let data = format!(
        "const MARKERS = {};\nconst STOPS = {};\nconst VIEW = {};\n",
        script_json(&markers),
        script_json(&stops),
        script_json(&view),
    );

    let sidebar = legend(
        input.listings,
        &settings.palette,
        input.mean_rent,
        input.generated,
    );

    MapDocument {
        markup: map_layout("Vuokra-asunnot", sidebar, PreEscaped(data)),
        markers: markers.len(),
        skipped,
    }
}

/// JSON that is safe to inline in a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

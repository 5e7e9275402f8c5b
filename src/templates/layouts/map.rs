use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Full-window Leaflet page. `data_script` must define `MARKERS`, `STOPS`
/// and `VIEW`; `sidebar` floats over the map.
pub fn map_layout(title: &str, sidebar: Markup, data_script: PreEscaped<String>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fi" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(LEAFLET_JS) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                div id="map" {}
                aside class="legend" { (sidebar) }
                script { (data_script) }
                script { (PreEscaped(DRAW_SCRIPT)) }
            }
        }
    }
}

const STYLE: &str = r#"
html, body { height: 100%; margin: 0; }
#map { position: absolute; inset: 0; }
.legend {
  position: absolute; top: 1rem; right: 1rem; z-index: 1000;
  background: white; padding: 0.75rem 1rem; border-radius: 6px;
  font-family: system-ui, sans-serif; font-size: 0.9rem;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
}
.legend ul { list-style: none; margin: 0.5rem 0; padding: 0; }
.legend .swatch {
  display: inline-block; width: 0.8rem; height: 0.8rem;
  border-radius: 50%; margin-right: 0.4rem; vertical-align: middle;
}
"#;

const DRAW_SCRIPT: &str = r#"
const map = L.map('map').setView(VIEW.center, VIEW.zoom);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  maxZoom: 19,
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
for (const s of STOPS) {
  L.circleMarker([s.lat, s.lon], { radius: 3, color: 'grey', weight: 1, fillOpacity: 0.6 }).addTo(map);
}
for (const m of MARKERS) {
  L.circleMarker([m.lat, m.lon], {
    radius: 9, color: m.color, fillColor: m.color, fillOpacity: 0.85, weight: 2
  }).bindPopup(m.popup).addTo(map);
}
"#;

pub mod listing_map;

pub use listing_map::{render_map, MapDocument, MapInput};

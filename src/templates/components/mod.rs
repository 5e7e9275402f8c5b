pub mod legend;
pub mod popup;

pub use legend::legend;
pub use popup::listing_popup;

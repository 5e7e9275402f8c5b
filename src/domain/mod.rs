pub mod listing;
pub mod ranking;

pub use listing::{normalize_listings, ListingRow};
pub use ranking::{mean_rent, rank_listings, RankedListing};

pub mod client;
pub mod models;
mod scraper_error;
pub mod tokens;

pub use client::{FetchedCards, OikotieClient, MAX_CARDS};
pub use scraper_error::ScraperError;

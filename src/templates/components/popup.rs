use crate::domain::RankedListing;
use maud::{html, Markup};

pub fn listing_popup(listing: &RankedListing) -> Markup {
    let row = &listing.row;
    let name = row.address.as_deref().unwrap_or("Listing");

    html! {
        @match &row.url {
            Some(url) => a href=(url) target="_blank" { (name) },
            None => strong { (name) },
        }
        br;
        (format!("{:.0}", listing.price)) " €/kk"
        @if let Some(size) = row.size {
            br;
            (size) " m²"
        }
        br;
        (format!("{:.2}", listing.per_square_metre)) " €/m²"
    }
}

use crate::config::Palette;
use crate::domain::ranking::QUINTILES;
use crate::domain::RankedListing;
use maud::{html, Markup};

/// Lowest and highest €/m² that ended up in each quintile.
pub fn quintile_ranges(listings: &[RankedListing]) -> [Option<(f64, f64)>; QUINTILES] {
    let mut ranges = [None; QUINTILES];
    for l in listings {
        if let Some(slot) = ranges.get_mut(l.quintile as usize) {
            let (lo, hi) = slot.unwrap_or((l.per_square_metre, l.per_square_metre));
            *slot = Some((lo.min(l.per_square_metre), hi.max(l.per_square_metre)));
        }
    }
    ranges
}

pub fn legend(
    listings: &[RankedListing],
    palette: &Palette,
    mean_rent: Option<f64>,
    generated: &str,
) -> Markup {
    let ranges = quintile_ranges(listings);

    html! {
        strong { (listings.len()) " listings" }
        @if let Some(mean) = mean_rent {
            div { "Mean rent " (format!("{mean:.0}")) " €/kk" }
        }
        ul {
            @for (label, range) in ranges.iter().enumerate() {
                @if let Some((lo, hi)) = range {
                    li {
                        span class="swatch" style={ "background:" (palette.color_for(label as u8)) } {}
                        (format!("{lo:.1}–{hi:.1} €/m²"))
                    }
                }
            }
        }
        small { "Updated " (generated) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListingRow;

    fn ranked(ratio: f64, quintile: u8) -> RankedListing {
        RankedListing {
            row: ListingRow::default(),
            price: ratio * 10.0,
            per_square_metre: ratio,
            quintile,
        }
    }

    #[test]
    fn ranges_track_min_and_max_per_label() {
        let listings = vec![ranked(12.0, 0), ranked(10.0, 0), ranked(30.0, 4)];
        let ranges = quintile_ranges(&listings);

        assert_eq!(ranges[0], Some((10.0, 12.0)));
        assert_eq!(ranges[1], None);
        assert_eq!(ranges[4], Some((30.0, 30.0)));
    }

    #[test]
    fn legend_lists_only_populated_quintiles() {
        let listings = vec![ranked(10.0, 0), ranked(30.0, 4)];
        let html = legend(&listings, &Palette::default(), Some(200.0), "2024-01-01 12:00").into_string();

        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("background:lightgreen"));
        assert!(html.contains("background:red"));
        assert!(html.contains("Mean rent 200 €/kk"));
    }
}

// src/domain/ranking.rs

use crate::domain::listing::ListingRow;
use crate::errors::PipelineError;

pub const QUINTILES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    pub row: ListingRow,
    /// Cleaned monthly rent.
    pub price: f64,
    pub per_square_metre: f64,
    /// 0 is the cheapest fifth per square metre, 4 the most expensive.
    pub quintile: u8,
}

/// Drops everything that is not an ASCII digit and parses the rest.
///
/// `"1 200 €/kk"` becomes `1200.0`. Decimal separators are dropped along with
/// everything else, so `"1 200,50 €"` reads as `120050.0`.
pub fn clean_price(raw: &str) -> Result<f64, PipelineError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(PipelineError::PriceParse {
            raw: raw.to_string(),
        }),
    }
}

pub fn per_square_metre(row: &ListingRow, price: f64) -> Result<f64, PipelineError> {
    match row.size {
        Some(size) if size.is_finite() && size > 0.0 => Ok(price / size),
        size => Err(PipelineError::Division {
            url: row.label(),
            size,
        }),
    }
}

/// Quantile binning of `ratios` into quintile labels, returned in input order.
///
/// Ratios are ranked ascending with ties kept in input order. Bin edges sit at
/// the interpolated quantiles `k * (n - 1) / 5` and each bin is closed on the
/// right, so rank `p` gets `ceil(5p / (n - 1)) - 1`, floored at 0. A single
/// ratio gets label 0; with two to four the cheapest is 0 and the dearest 4.
pub fn assign_quintiles(ratios: &[f64]) -> Vec<u8> {
    let n = ratios.len();
    let mut order: Vec<usize> = (0..n).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| ratios[a].total_cmp(&ratios[b]));

    let mut labels = vec![0u8; n];
    for (rank, &idx) in order.iter().enumerate() {
        labels[idx] = quantile_label(rank, n);
    }
    labels
}

fn quantile_label(rank: usize, n: usize) -> u8 {
    if n < 2 {
        return 0;
    }
    let upper_edge = (QUINTILES * rank).div_ceil(n - 1);
    upper_edge.saturating_sub(1) as u8
}

pub fn rank_listings(rows: Vec<ListingRow>) -> Result<Vec<RankedListing>, PipelineError> {
    let mut priced = Vec::with_capacity(rows.len());

    for row in rows {
        let raw = row.price.as_deref().ok_or_else(|| PipelineError::MissingField {
            field: "price",
            url: row.label(),
        })?;
        let price = clean_price(raw)?;
        let ratio = per_square_metre(&row, price)?;
        priced.push((row, price, ratio));
    }

    let ratios: Vec<f64> = priced.iter().map(|(_, _, ratio)| *ratio).collect();
    let labels = assign_quintiles(&ratios);

    Ok(priced
        .into_iter()
        .zip(labels)
        .map(|((row, price, per_square_metre), quintile)| RankedListing {
            row,
            price,
            per_square_metre,
            quintile,
        })
        .collect())
}

pub fn mean_rent(listings: &[RankedListing]) -> Option<f64> {
    if listings.is_empty() {
        return None;
    }
    let total: f64 = listings.iter().map(|l| l.price).sum();
    Some(total / listings.len() as f64)
}

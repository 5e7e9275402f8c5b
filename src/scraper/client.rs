// client.rs
use crate::config::{Endpoints, SearchFilter};
use crate::scraper::models::{CardsResponse, RawListing};
use crate::scraper::tokens::{extract_tokens, SessionTokens};
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// The cards API never returns more than this many cards for one query.
/// There is no pagination loop: anything past the cap is reported, not fetched.
pub const MAX_CARDS: usize = 1000;

pub struct OikotieClient {
    client: Client,
    endpoints: Endpoints,
}

#[derive(Debug, Default)]
pub struct FetchedCards {
    pub cards: Vec<RawListing>,
    /// What the API says matched the query.
    pub found: Option<u64>,
}

impl FetchedCards {
    pub fn truncated(&self) -> bool {
        self.found
            .map(|found| found > self.cards.len() as u64)
            .unwrap_or(false)
    }
}

impl OikotieClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, endpoints })
    }

    pub fn fetch_tokens(&self) -> Result<SessionTokens, ScraperError> {
        let html = self.get_text(&self.endpoints.page_url, &[], None)?;
        extract_tokens(&html)
    }

    pub fn fetch_cards(
        &self,
        tokens: &SessionTokens,
        filter: &SearchFilter,
    ) -> Result<FetchedCards, ScraperError> {
        let query = search_query(filter);
        let body = self.get_text(&self.endpoints.api_url, &query, Some(tokens))?;
        let fetched = parse_cards(&body)?;

        if fetched.truncated() {
            tracing::warn!(
                found = ?fetched.found,
                fetched = fetched.cards.len(),
                cap = MAX_CARDS,
                "query matched more cards than one request returns; the rest are dropped"
            );
        }

        Ok(fetched)
    }

    fn get_text(
        &self,
        url: &str,
        query: &[(&'static str, String)],
        tokens: Option<&SessionTokens>,
    ) -> Result<String, ScraperError> {
        let mut request = self.client.get(url).query(query);
        if let Some(tokens) = tokens {
            for (name, value) in tokens.headers() {
                request = request.header(name, value);
            }
        }

        let resp = request
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("GET {url} returned HTTP {status}")));
        }

        tracing::debug!(%url, bytes = text.len(), "fetched");
        Ok(text)
    }
}

/// Query parameters for one cards request. `offset` is always 0.
pub fn search_query(filter: &SearchFilter) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("cardType", filter.card_type.to_string()),
        ("limit", filter.limit.min(MAX_CARDS).to_string()),
        ("locations", filter.locations_param()),
        ("offset", "0".to_string()),
        ("constructionYear[max]", filter.construction_year_max.to_string()),
    ];

    for rooms in &filter.room_counts {
        params.push(("roomCount[]", rooms.to_string()));
    }

    params.extend([
        ("price[min]", filter.price_min.to_string()),
        ("price[max]", filter.price_max.to_string()),
        ("size[min]", filter.size_min.to_string()),
        ("size[max]", filter.size_max.to_string()),
        ("sortBy", filter.sort_by.clone()),
    ]);

    params
}

pub fn parse_cards(body: &str) -> Result<FetchedCards, ScraperError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    if !value.get("cards").map(|c| c.is_array()).unwrap_or(false) {
        return Err(ScraperError::UnexpectedShape("cards missing".to_string()));
    }

    let response: CardsResponse =
        serde_json::from_value(value).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    Ok(FetchedCards {
        cards: response.cards,
        found: response.found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(params: &'a [(&'static str, String)], key: &str) -> Vec<&'a str> {
        params
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn query_carries_fixed_offset_and_repeated_room_counts() {
        let params = search_query(&SearchFilter::default());
        let get = |key: &str| values(&params, key);

        assert_eq!(get("offset"), ["0"]);
        assert_eq!(get("limit"), ["1000"]);
        assert_eq!(get("cardType"), ["101"]);
        assert_eq!(get("roomCount[]"), ["2", "3", "4"]);
        assert_eq!(get("size[min]"), ["55"]);
        assert_eq!(get("price[max]"), ["1500"]);
        assert_eq!(get("sortBy"), ["published_sort_desc"]);
        assert!(get("locations")[0].starts_with("[[14694,5,"));
    }

    #[test]
    fn limit_is_clamped_to_cap() {
        let filter = SearchFilter {
            limit: 5000,
            ..SearchFilter::default()
        };
        let params = search_query(&filter);
        let limit = params.iter().find(|(k, _)| *k == "limit").unwrap();
        assert_eq!(limit.1, MAX_CARDS.to_string());
    }

    #[test]
    fn parses_cards_and_ignores_unknown_keys() {
        let body = r#"{
            "found": 2,
            "start": 0,
            "cards": [
                {"url": "https://example.test/1", "price": "1 200 €/kk", "size": 60,
                 "brandName": "ignored",
                 "buildingData": {"address": "Mannerheimintie 1", "district": "Kamppi",
                                  "city": "Helsinki", "year": 1930, "buildingType": "x"},
                 "coordinates": {"latitude": 60.17, "longitude": 24.94, "approximate": false}},
                {"url": "https://example.test/2"}
            ]
        }"#;

        let fetched = parse_cards(body).unwrap();

        assert_eq!(fetched.cards.len(), 2);
        assert!(!fetched.truncated());
        let first = &fetched.cards[0];
        assert_eq!(first.price.as_deref(), Some("1 200 €/kk"));
        assert_eq!(first.size, Some(60.0));
        assert_eq!(first.building_data.as_ref().unwrap().year, Some(1930));
        assert!(fetched.cards[1].coordinates.is_none());
    }

    #[test]
    fn reports_truncation_when_found_exceeds_cards() {
        let fetched = parse_cards(r#"{"found": 1500, "cards": [{}, {}]}"#).unwrap();
        assert!(fetched.truncated());
    }

    #[test]
    fn empty_card_list_is_not_an_error() {
        let fetched = parse_cards(r#"{"found": 0, "cards": []}"#).unwrap();
        assert!(fetched.cards.is_empty());
        assert!(!fetched.truncated());
    }

    #[test]
    fn missing_cards_array_is_unexpected_shape() {
        let err = parse_cards(r#"{"error": "invalid token"}"#).unwrap_err();
        assert!(matches!(err, ScraperError::UnexpectedShape(_)));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_cards("<html>").unwrap_err();
        assert!(matches!(err, ScraperError::JsonParse(_)));
    }
}

use crate::scraper::ScraperError;
use scraper::{Html, Selector};

/// Session tokens the cards API expects as request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub cuid: String,
    pub loaded: String,
    pub api_token: String,
}

impl SessionTokens {
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("OTA-cuid", self.cuid.as_str()),
            ("OTA-loaded", self.loaded.as_str()),
            ("OTA-token", self.api_token.as_str()),
        ]
    }
}

/// Reads the `cuid`, `loaded` and `api-token` `<meta>` tags from the listing page.
pub fn extract_tokens(html: &str) -> Result<SessionTokens, ScraperError> {
    let document = Html::parse_document(html);

    Ok(SessionTokens {
        cuid: meta_content(&document, "cuid")?,
        loaded: meta_content(&document, "loaded")?,
        api_token: meta_content(&document, "api-token")?,
    })
}

fn meta_content(document: &Html, name: &'static str) -> Result<String, ScraperError> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#))
        .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    document
        .select(&selector)
        .find_map(|el| el.value().attr("content"))
        .map(str::to_string)
        .ok_or(ScraperError::MissingToken(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="api-token" content="abc123token">
  <meta name="loaded" content="1697000000">
  <meta name="cuid" content="cuid-xyz">
  <title>Vuokra-asunnot</title>
</head>
<body></body>
</html>"#;

    #[test]
    fn extracts_all_three_tokens() {
        let tokens = extract_tokens(PAGE).unwrap();

        assert_eq!(tokens.cuid, "cuid-xyz");
        assert_eq!(tokens.loaded, "1697000000");
        assert_eq!(tokens.api_token, "abc123token");
    }

    #[test]
    fn attribute_order_and_layout_do_not_matter() {
        let page = r#"<html><head><meta content="c" name="cuid"/><meta
            content="l" name="loaded"><meta name="api-token"
            content="t"></head></html>"#;

        let tokens = extract_tokens(page).unwrap();
        assert_eq!(
            tokens.headers(),
            [("OTA-cuid", "c"), ("OTA-loaded", "l"), ("OTA-token", "t")]
        );
    }

    #[test]
    fn missing_tag_is_reported_by_name() {
        let page = PAGE.replace(r#"<meta name="loaded" content="1697000000">"#, "");

        match extract_tokens(&page) {
            Err(ScraperError::MissingToken(name)) => assert_eq!(name, "loaded"),
            other => panic!("expected MissingToken, got {other:?}"),
        }
    }
}

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use url::Url;

use crate::cards::currency::Currency;
use crate::cards::scryfallcard::{RawScryfallCard, ScryfallCard};
use crate::error::LookupError;
use crate::lookup::CardLookup;
use crate::utilities::constants::{SCRYFALL_API_URL, SCRYFALL_NAMED_CARD_PATH};

pub struct ScryfallClient {
    client: reqwest::Client,
    base_url: String,
    currency: Currency,
}

impl ScryfallClient {
    /// Client sending the Scryfall headers with every request
    pub fn new(base_url: Option<&str>, currency: Currency) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .default_headers(Self::setup_http_headers())
            .build()?;
        Ok(ScryfallClient {
            client,
            base_url: base_url
                .unwrap_or(SCRYFALL_API_URL)
                .trim_end_matches('/')
                .to_string(),
            currency,
        })
    }

    // Scryfall rejects requests without these two headers
    fn setup_http_headers() -> HeaderMap {
        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header_map.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("mtg_deck_pages/", env!("CARGO_PKG_VERSION"))),
        );
        header_map
    }

    fn named_card_url(&self, card_name: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(
            &format!("{}{}", self.base_url, SCRYFALL_NAMED_CARD_PATH),
            &[("exact", card_name)],
        )
        .map_err(|e| transport_error(card_name, e))
    }
}

fn transport_error(card_name: &str, reason: impl ToString) -> LookupError {
    LookupError::Transport {
        name: card_name.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl CardLookup for ScryfallClient {
    async fn lookup_exact(&self, name: &str) -> Result<ScryfallCard, LookupError> {
        let url = self.named_card_url(name)?;
        debug!("Looking up card on Scryfall: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(name, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(transport_error(name, format!("status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(name, e))?;
        let raw: RawScryfallCard =
            serde_json::from_str(&body).map_err(|e| transport_error(name, e))?;

        ScryfallCard::from_raw(raw, self.currency)
    }
}

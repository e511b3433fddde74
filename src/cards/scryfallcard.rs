use serde::Deserialize;

use super::{card_type::CardType, currency::Currency, price::Price};
use crate::error::LookupError;

/// The parts of a Scryfall card we keep after a lookup
#[derive(Debug, PartialEq, Clone)]
pub struct ScryfallCard {
    pub name: String,
    pub type_line: String,
    pub scryfall_uri: String,
    pub image_url: String,
    pub price: Option<Price>,
}

impl ScryfallCard {
    pub fn card_type(&self) -> CardType {
        CardType::from_type_line(&self.type_line)
    }

    pub fn from_raw(raw: RawScryfallCard, currency: Currency) -> Result<Self, LookupError> {
        let image_url = raw
            .image_url()
            .ok_or_else(|| LookupError::MissingImageData(raw.name.clone()))?
            .to_string();
        let type_line = raw
            .type_line()
            .filter(|type_line| !CardType::from_type_line(type_line).is_blank())
            .ok_or_else(|| LookupError::MissingTypeLine(raw.name.clone()))?
            .to_string();
        let price = raw
            .prices
            .for_currency(currency)
            .and_then(|amount| Price::parse(amount, currency));

        Ok(ScryfallCard {
            name: raw.name,
            type_line,
            scryfall_uri: raw.scryfall_uri,
            image_url,
            price,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawScryfallCard {
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
    pub scryfall_uri: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<RawCardFace>>,
    #[serde(default)]
    pub prices: RawPrices,
}

impl RawScryfallCard {
    /// The card's own image, or the front face's image for multi-faced cards
    pub fn image_url(&self) -> Option<&str> {
        match &self.image_uris {
            Some(image_uris) => image_uris.border_crop.as_deref(),
            None => self
                .card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.image_uris.as_ref())
                .and_then(|image_uris| image_uris.border_crop.as_deref()),
        }
    }

    // Reversible cards only carry a type line on their faces
    fn type_line(&self) -> Option<&str> {
        self.type_line.as_deref().or_else(|| {
            self.card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.type_line.as_deref())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCardFace {
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub border_crop: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrices {
    #[serde(default)]
    pub eur: Option<String>,
    #[serde(default)]
    pub usd: Option<String>,
}

impl RawPrices {
    fn for_currency(&self, currency: Currency) -> Option<&str> {
        match currency {
            Currency::EUR => self.eur.as_deref(),
            Currency::USD => self.usd.as_deref(),
        }
    }
}

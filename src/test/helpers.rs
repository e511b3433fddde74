use std::collections::HashMap;

use async_trait::async_trait;

use crate::cards::{
    card_type::CardType, collection_card::CollectionCard, currency::Currency, price::Price,
    scryfallcard::ScryfallCard,
};
use crate::error::LookupError;
use crate::lookup::CardLookup;

/// ManaBox export with two cards Scryfall knows about and two it does not
pub static ARAHBO_DECK_CSV: &str = "Name,Set code,Set name,Collector number,Foil,Rarity,Quantity,ManaBox ID,Scryfall ID,Purchase price,Misprint,Altered,Condition,Language,Purchase price currency\n\
Sol Ring,CMM,Commander Masters,396,normal,uncommon,1,101,897c6c19-d4c2-4bba-9c58-e9b07b2a7e9b,1.20,false,false,near_mint,en,EUR\n\
\"Arahbo, Roar of the World\",C17,Commander 2017,35,foil,mythic,1,102,,4.00,false,false,near_mint,en,EUR\n\
Imaginary Card,XXX,Made Up,1,normal,rare,1,103,,,false,false,near_mint,en,EUR\n\
Command Tower,CMM,Commander Masters,1013,normal,common,2,104,,0.10,false,false,near_mint,en,EUR\n";

pub fn sol_ring_scryfall_card() -> ScryfallCard {
    ScryfallCard {
        name: "Sol Ring".to_string(),
        type_line: "Artifact".to_string(),
        scryfall_uri: "https://scryfall.com/card/cmm/396/sol-ring".to_string(),
        image_url: "https://cards.scryfall.io/border_crop/front/8/9/sol-ring.jpg".to_string(),
        price: Some(Price::new(1.49, Currency::EUR)),
    }
}

pub fn arahbo_scryfall_card() -> ScryfallCard {
    ScryfallCard {
        name: "Arahbo, Roar of the World".to_string(),
        type_line: "Legendary Creature — Cat Avatar".to_string(),
        scryfall_uri: "https://scryfall.com/card/c17/35/arahbo-roar-of-the-world".to_string(),
        image_url: "https://cards.scryfall.io/border_crop/front/a/r/arahbo.jpg".to_string(),
        price: None,
    }
}

/// Row as it reads after enrichment; a blank type means the lookup failed
pub fn collection_card(name: &str, card_type: &str) -> CollectionCard {
    let enriched = !card_type.is_empty();
    let slug = name.to_lowercase().replace(' ', "-");
    let when_enriched = |value: String| if enriched { value } else { String::new() };
    CollectionCard {
        name: name.to_string(),
        quantity: "1".to_string(),
        set_name: "Commander Masters".to_string(),
        set_code: "CMM".to_string(),
        collector_number: "1".to_string(),
        rarity: "common".to_string(),
        purchase_price: String::new(),
        purchase_price_currency: None,
        card_type: CardType::new(card_type),
        scryfall_url: when_enriched(format!("https://scryfall.com/card/cmm/1/{}", slug)),
        image_url: when_enriched(format!("https://cards.scryfall.io/border_crop/{}.jpg", slug)),
        market_price: when_enriched("0.25".to_string()),
    }
}

/// Deterministic lookup answering from a fixed set of cards
#[derive(Default)]
pub struct StubLookup {
    cards: HashMap<String, ScryfallCard>,
}

impl StubLookup {
    pub fn with_cards(cards: Vec<ScryfallCard>) -> Self {
        StubLookup {
            cards: cards
                .into_iter()
                .map(|card| (card.name.clone(), card))
                .collect(),
        }
    }
}

#[async_trait]
impl CardLookup for StubLookup {
    async fn lookup_exact(&self, name: &str) -> Result<ScryfallCard, LookupError> {
        self.cards
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}

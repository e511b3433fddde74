use super::{card_type::CardType, currency::Currency};
use crate::collection_table::CollectionTable;
use crate::utilities::constants::{
    COLLECTOR_NUMBER_COLUMN, IMAGE_URL_COLUMN, MARKET_PRICE_COLUMN, NAME_COLUMN,
    PURCHASE_PRICE_COLUMN, PURCHASE_PRICE_CURRENCY_COLUMN, QUANTITY_COLUMN, RARITY_COLUMN, SCRYFALL_URL_COLUMN, SET_CODE_COLUMN,
    SET_NAME_COLUMN, TYPE_COLUMN,
};

/// One row of an enriched collection table, as shown on a deck page
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCard {
    pub name: String,
    pub quantity: String,
    pub set_name: String,
    pub set_code: String,
    pub collector_number: String,
    pub rarity: String,
    pub purchase_price: String,
    /// Currency the purchase was recorded in, None when the export has no or an unknown currency
    pub purchase_price_currency: Option<Currency>,
    pub card_type: CardType,
    pub scryfall_url: String,
    pub image_url: String,
    pub market_price: String,
}

impl CollectionCard {
    pub fn from_row(table: &CollectionTable, row: &[String]) -> Self {
        let value = |column: &str| table.value(row, column).to_string();
        CollectionCard {
            name: value(NAME_COLUMN),
            quantity: value(QUANTITY_COLUMN),
            set_name: value(SET_NAME_COLUMN),
            set_code: value(SET_CODE_COLUMN),
            collector_number: value(COLLECTOR_NUMBER_COLUMN),
            rarity: value(RARITY_COLUMN),
            purchase_price: value(PURCHASE_PRICE_COLUMN),
            purchase_price_currency: table
                .value(row, PURCHASE_PRICE_CURRENCY_COLUMN)
                .trim()
                .parse()
                .ok(),
            card_type: CardType::new(table.value(row, TYPE_COLUMN)),
            scryfall_url: value(SCRYFALL_URL_COLUMN),
            image_url: value(IMAGE_URL_COLUMN),
            market_price: value(MARKET_PRICE_COLUMN),
        }
    }

    /// Every row of the table, sorted by card name
    pub fn from_table(table: &CollectionTable) -> Vec<Self> {
        let mut cards: Vec<CollectionCard> = table
            .rows()
            .iter()
            .map(|row| CollectionCard::from_row(table, row))
            .collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        cards
    }

    pub fn is_enriched(&self) -> bool {
        !self.card_type.is_blank()
    }
}

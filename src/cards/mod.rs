pub mod card_type;
pub mod collection_card;
pub mod currency;
pub mod deck;
pub mod price;
pub mod scryfallcard;

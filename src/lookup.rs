use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::cards::scryfallcard::ScryfallCard;
use crate::error::LookupError;

/// Finds a card by its exact name
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardLookup {
    async fn lookup_exact(&self, name: &str) -> Result<ScryfallCard, LookupError>;
}

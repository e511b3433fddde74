use crate::cards::{card_type::CardType, collection_card::CollectionCard};
use crate::utilities::constants::UNRESOLVED_GROUP_TITLE;

#[derive(Debug, PartialEq)]
pub struct CardGroup<'a> {
    pub card_type: CardType,
    pub cards: Vec<&'a CollectionCard>,
}

impl CardGroup<'_> {
    pub fn heading(&self) -> String {
        if self.card_type.is_blank() {
            format!("{} ({})", UNRESOLVED_GROUP_TITLE, self.cards.len())
        } else {
            self.card_type.heading(self.cards.len())
        }
    }
}

/// Groups cards by type in the order the types first appear.
/// Cards without a type (failed lookups) end up in a trailing group.
pub fn group_by_type(cards: &[CollectionCard]) -> Vec<CardGroup<'_>> {
    let mut groups: Vec<CardGroup> = Vec::new();
    let mut unresolved = Vec::new();

    for card in cards {
        if !card.is_enriched() {
            unresolved.push(card);
            continue;
        }
        match groups
            .iter_mut()
            .find(|group| group.card_type == card.card_type)
        {
            Some(group) => group.cards.push(card),
            None => groups.push(CardGroup {
                card_type: card.card_type.clone(),
                cards: vec![card],
            }),
        }
    }

    if !unresolved.is_empty() {
        groups.push(CardGroup {
            card_type: CardType::new(""),
            cards: unresolved,
        });
    }
    groups
}

use std::path::Path;

use log::{debug, info, warn};

use crate::cards::scryfallcard::ScryfallCard;
use crate::collection_table::CollectionTable;
use crate::error::{DeckError, LookupError};
use crate::lookup::CardLookup;
use crate::utilities::constants::{DERIVED_COLUMNS, MISSING_PRICE, NAME_COLUMN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnrichmentStats {
    pub total: usize,
    pub enriched: usize,
    pub failed: usize,
}

/// Positions of the looked-up columns in an enriched table
#[derive(Debug, Clone, Copy)]
struct DerivedColumns {
    card_type: usize,
    scryfall_url: usize,
    image_url: usize,
    market_price: usize,
}

impl DerivedColumns {
    fn ensure(table: &mut CollectionTable) -> Self {
        let [card_type, scryfall_url, image_url, market_price] =
            DERIVED_COLUMNS.map(|column| table.ensure_column(column));
        DerivedColumns {
            card_type,
            scryfall_url,
            image_url,
            market_price,
        }
    }
}

/// Row with its looked-up columns rewritten. All four are filled on success, all blank otherwise.
fn enrich_row(
    row: &[String],
    columns: DerivedColumns,
    outcome: &Result<ScryfallCard, LookupError>,
) -> Vec<String> {
    let mut row = row.to_vec();
    let (card_type, scryfall_url, image_url, market_price) = match outcome {
        Ok(card) => (
            card.card_type().to_string(),
            card.scryfall_uri.clone(),
            card.image_url.clone(),
            card.price
                .map_or_else(|| MISSING_PRICE.to_string(), |price| price.to_string()),
        ),
        Err(_) => Default::default(),
    };
    row[columns.card_type] = card_type;
    row[columns.scryfall_url] = scryfall_url;
    row[columns.image_url] = image_url;
    row[columns.market_price] = market_price;
    row
}

// A match without a type cannot fill every derived column
fn require_card_type(name: &str, card: ScryfallCard) -> Result<ScryfallCard, LookupError> {
    if card.card_type().is_blank() {
        Err(LookupError::MissingTypeLine(name.to_string()))
    } else {
        Ok(card)
    }
}

pub struct Enricher<'a, L: CardLookup> {
    lookup: &'a L,
}

impl<'a, L: CardLookup> Enricher<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Enricher { lookup }
    }

    /// Looks up every card one after the other and returns a new, name sorted table
    pub async fn enrich(
        &self,
        table: &CollectionTable,
    ) -> Result<(CollectionTable, EnrichmentStats), DeckError> {
        let mut working = table.clone();
        let columns = DerivedColumns::ensure(&mut working);
        working.sort_by_name();

        let mut stats = EnrichmentStats {
            total: working.len(),
            ..Default::default()
        };
        if working.is_empty() {
            warn!("No cards to enrich");
        }
        let mut rows = Vec::with_capacity(working.len());

        for row in working.rows() {
            let name = working.value(row, NAME_COLUMN).trim();
            info!("{}", name);

            let outcome = if name.is_empty() {
                Err(LookupError::NotFound(name.to_string()))
            } else {
                self.lookup
                    .lookup_exact(name)
                    .await
                    .and_then(|card| require_card_type(name, card))
            };

            match &outcome {
                Ok(card) => {
                    stats.enriched += 1;
                    debug!("{} matched {} ({})", name, card.name, card.scryfall_uri);
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!("Details not found for card: {} ({})", name, e);
                }
            }
            rows.push(enrich_row(row, columns, &outcome));
        }

        Ok((working.with_rows(rows)?, stats))
    }

    /// Reads `input`, enriches every row and writes the whole table to `output` once
    pub async fn enrich_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<EnrichmentStats, DeckError> {
        let table = CollectionTable::read_from_path(input)?;
        let (enriched, stats) = self.enrich(&table).await?;
        enriched.write_to_path(output)?;
        info!(
            "CSV updated and saved to {} ({} of {} cards enriched, {} failed)",
            output.display(),
            stats.enriched,
            stats.total,
            stats.failed
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::lookup::MockCardLookup;
    use crate::test::helpers::{
        arahbo_scryfall_card, sol_ring_scryfall_card, StubLookup, ARAHBO_DECK_CSV,
    };
    use tempfile::tempdir;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn derived_values<'t>(table: &'t CollectionTable, row: &'t [String]) -> Vec<&'t str> {
        DERIVED_COLUMNS
            .iter()
            .map(|column| table.value(row, column))
            .collect()
    }

    #[tokio::test]
    async fn test_successful_and_failed_rows_are_all_or_nothing() {
        init();
        let table = CollectionTable::from_reader(ARAHBO_DECK_CSV.as_bytes()).unwrap();
        let lookup = StubLookup::with_cards(vec![sol_ring_scryfall_card(), arahbo_scryfall_card()]);

        let (enriched, stats) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        assert_eq!(enriched.len(), table.len());
        assert_eq!(
            stats,
            EnrichmentStats {
                total: 4,
                enriched: 2,
                failed: 2
            }
        );
        for row in enriched.rows() {
            let values = derived_values(&enriched, row);
            let all_filled = values.iter().all(|value| !value.is_empty());
            let all_blank = values.iter().all(|value| value.is_empty());
            assert!(all_filled || all_blank, "mixed derived values: {:?}", values);
        }
    }

    #[tokio::test]
    async fn test_rows_are_sorted_and_derived_fields_written() {
        init();
        let table = CollectionTable::from_reader(ARAHBO_DECK_CSV.as_bytes()).unwrap();
        let lookup = StubLookup::with_cards(vec![sol_ring_scryfall_card(), arahbo_scryfall_card()]);

        let (enriched, _) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        let names: Vec<&str> = enriched
            .rows()
            .iter()
            .map(|row| enriched.value(row, NAME_COLUMN))
            .collect();
        assert_eq!(
            names,
            vec![
                "Arahbo, Roar of the World",
                "Command Tower",
                "Imaginary Card",
                "Sol Ring"
            ]
        );

        let arahbo = &enriched.rows()[0];
        assert_eq!(
            derived_values(&enriched, arahbo),
            vec![
                "Legendary Creature",
                "https://scryfall.com/card/c17/35/arahbo-roar-of-the-world",
                "https://cards.scryfall.io/border_crop/front/a/r/arahbo.jpg",
                "N/A"
            ]
        );
        let sol_ring = &enriched.rows()[3];
        assert_eq!(enriched.value(sol_ring, "Prix"), "1.49");
        assert_eq!(enriched.value(sol_ring, "ManaBox ID"), "101");
    }

    #[tokio::test]
    async fn test_existing_derived_values_are_overwritten() {
        init();
        let csv = "Name,Quantity,Type,Scryfall URL,Image URL,Prix\n\
Sol Ring,1,Old type,https://old,https://old.jpg,99.00\n\
Unknown Card,1,Stale,https://stale,https://stale.jpg,1.00\n";
        let table = CollectionTable::from_reader(csv.as_bytes()).unwrap();
        let lookup = StubLookup::with_cards(vec![sol_ring_scryfall_card()]);

        let (enriched, _) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        assert_eq!(enriched.headers().len(), 6);
        let sol_ring = &enriched.rows()[0];
        assert_eq!(enriched.value(sol_ring, "Type"), "Artifact");
        assert_eq!(enriched.value(sol_ring, "Prix"), "1.49");
        let unknown = &enriched.rows()[1];
        assert_eq!(derived_values(&enriched, unknown), vec!["", "", "", ""]);
    }

    #[tokio::test]
    async fn test_every_failure_kind_leaves_the_row_blank() {
        init();
        let csv = "Name\nAlpha\nBeta\nGamma\n";
        let table = CollectionTable::from_reader(csv.as_bytes()).unwrap();

        let mut lookup = MockCardLookup::new();
        lookup
            .expect_lookup_exact()
            .withf(|name: &str| name == "Alpha")
            .times(1)
            .returning(|name| Err(LookupError::NotFound(name.to_string())));
        lookup
            .expect_lookup_exact()
            .withf(|name: &str| name == "Beta")
            .times(1)
            .returning(|name| {
                Err(LookupError::Transport {
                    name: name.to_string(),
                    reason: "status 500 Internal Server Error".to_string(),
                })
            });
        lookup
            .expect_lookup_exact()
            .withf(|name: &str| name == "Gamma")
            .times(1)
            .returning(|name| Err(LookupError::MissingImageData(name.to_string())));

        let (enriched, stats) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        assert_eq!(stats.failed, 3);
        assert_eq!(enriched.len(), 3);
        for row in enriched.rows() {
            assert_eq!(derived_values(&enriched, row), vec!["", "", "", ""]);
        }
    }

    #[tokio::test]
    async fn test_match_without_type_line_leaves_the_row_blank() {
        init();
        let csv = "Name,Quantity\nOdd,1\n";
        let table = CollectionTable::from_reader(csv.as_bytes()).unwrap();

        let mut lookup = MockCardLookup::new();
        lookup.expect_lookup_exact().times(1).returning(|_| {
            Ok(ScryfallCard {
                name: "Odd".to_string(),
                type_line: String::new(),
                scryfall_uri: "https://scryfall.com/card/xxx/1/odd".to_string(),
                image_url: "https://cards.scryfall.io/border_crop/odd.jpg".to_string(),
                price: None,
            })
        });

        let (enriched, stats) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        assert_eq!(
            stats,
            EnrichmentStats {
                total: 1,
                enriched: 0,
                failed: 1
            }
        );
        assert_eq!(
            derived_values(&enriched, &enriched.rows()[0]),
            vec!["", "", "", ""]
        );
    }

    #[tokio::test]
    async fn test_blank_names_are_not_looked_up() {
        init();
        let csv = "Name,Quantity\n,1\nSol Ring,1\n";
        let table = CollectionTable::from_reader(csv.as_bytes()).unwrap();

        let mut lookup = MockCardLookup::new();
        lookup
            .expect_lookup_exact()
            .times(1)
            .returning(|_| Ok(sol_ring_scryfall_card()));

        let (enriched, stats) = Enricher::new(&lookup).enrich(&table).await.unwrap();

        assert_eq!(enriched.len(), 2);
        assert_eq!(stats.enriched, 1);
        assert_eq!(stats.failed, 1);
    }

    #[tokio::test]
    async fn test_enrich_file_is_repeatable() {
        init();
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("Arahbo.csv");
        let first = temp_dir.path().join("first-updated.csv");
        let second = temp_dir.path().join("second-updated.csv");
        fs::write(&input, ARAHBO_DECK_CSV).unwrap();
        let lookup = StubLookup::with_cards(vec![sol_ring_scryfall_card(), arahbo_scryfall_card()]);
        let enricher = Enricher::new(&lookup);

        enricher.enrich_file(&input, &first).await.unwrap();
        enricher.enrich_file(&input, &second).await.unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
        let reread = CollectionTable::read_from_path(&first).unwrap();
        assert_eq!(reread.len(), 4);
    }

    #[tokio::test]
    async fn test_enrich_file_missing_input_is_an_error() {
        init();
        let temp_dir = tempdir().unwrap();
        let lookup = StubLookup::default();

        let result = Enricher::new(&lookup)
            .enrich_file(
                &temp_dir.path().join("missing.csv"),
                &temp_dir.path().join("missing-updated.csv"),
            )
            .await;

        assert!(matches!(result, Err(DeckError::Io(_))));
        assert!(!temp_dir.path().join("missing-updated.csv").exists());
    }
}

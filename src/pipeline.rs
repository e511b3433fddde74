use std::path::PathBuf;

use log::{error, info, warn};

use crate::cards::{collection_card::CollectionCard, deck::Deck, scryfallcard::ScryfallCard};
use crate::collection_table::CollectionTable;
use crate::enricher::{EnrichmentStats, Enricher};
use crate::error::DeckError;
use crate::html_generator::{
    ensure_stylesheet, generate_index_page, generate_page_content, write_page, Commander,
    DeckPage,
};
use crate::lookup::CardLookup;
use crate::utilities::config::Config;
use crate::utilities::constants::INDEX_PAGE_NAME;

#[derive(Debug)]
pub struct DeckReport {
    pub deck: String,
    pub stats: EnrichmentStats,
    pub page_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<DeckReport>,
    pub failures: Vec<(String, DeckError)>,
}

async fn lookup_commander<L: CardLookup>(lookup: &L, name: &str) -> Option<ScryfallCard> {
    match lookup.lookup_exact(name).await {
        Ok(card) => Some(card),
        Err(e) => {
            warn!("Could not get commander details for {}: {}", name, e);
            None
        }
    }
}

/// Enriches `<decks_dir>/<deck>.csv` into `<deck>-updated.csv` and renders `<output_dir>/<deck>.html` from it
pub async fn process_deck<L: CardLookup>(
    config: &Config,
    lookup: &L,
    deck: &Deck,
    decks: &[Deck],
) -> Result<DeckReport, DeckError> {
    let input_path = deck.input_csv_path(&config.decks_dir);
    let updated_path = deck.updated_csv_path(&config.decks_dir);

    let stats = Enricher::new(lookup)
        .enrich_file(&input_path, &updated_path)
        .await?;

    let table = CollectionTable::read_from_path(&updated_path)?;
    let cards = CollectionCard::from_table(&table);

    let commander_card = match deck.commander() {
        Some(name) => lookup_commander(lookup, name).await,
        None => None,
    };
    let commander = deck.commander().map(|name| Commander {
        name,
        card: commander_card.as_ref(),
    });

    let content = generate_page_content(&DeckPage {
        deck,
        decks,
        cards: &cards,
        commander,
        css_file: &config.css_file,
        currency: config.currency,
    });
    let page_path = config.output_dir.join(deck.html_file_name());
    write_page(&page_path, &content)?;

    Ok(DeckReport {
        deck: deck.name.clone(),
        stats,
        page_path,
    })
}

/// Processes the decks one after the other. A failing deck is logged and skipped.
pub async fn process_all_decks<L: CardLookup>(
    config: &Config,
    lookup: &L,
    decks: &[Deck],
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    if config.write_stylesheet {
        if let Err(e) = ensure_stylesheet(&config.output_dir, &config.css_file) {
            error!("Failed to write stylesheet {}: {}", config.css_file, e);
        }
    }

    for deck in decks {
        info!("Processing deck: {}", deck.name);
        match process_deck(config, lookup, deck, decks).await {
            Ok(report) => {
                info!(
                    "Deck {} done: {} cards, {} without details, page {}",
                    report.deck,
                    report.stats.total,
                    report.stats.failed,
                    report.page_path.display()
                );
                summary.reports.push(report);
            }
            Err(e) => {
                error!("Failed to process deck {}: {}", deck.name, e);
                summary.failures.push((deck.name.clone(), e));
            }
        }
    }

    if config.generate_index {
        let index_path = config.output_dir.join(INDEX_PAGE_NAME);
        if let Err(e) = write_page(&index_path, &generate_index_page(decks, &config.css_file)) {
            error!("Failed to write {}: {}", index_path.display(), e);
        }
    }

    summary
}

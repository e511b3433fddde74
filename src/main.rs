mod card_groups;
mod cards;
mod collection_table;
mod enricher;
mod error;
mod html_generator;
mod lookup;
mod pipeline;
mod scryfall_client;
#[cfg(test)]
mod test;
mod utilities;

use chrono::Local;
use log::{error, info};

use crate::cards::deck::load_decks;
use crate::pipeline::process_all_decks;
use crate::scryfall_client::ScryfallClient;
use crate::utilities::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let start_time = Local::now();
    info!("Starting at {}", start_time);

    let config = Config::new();
    let decks = load_decks(&config)?;
    info!(
        "Loaded {} decks, reading from {} and writing pages to {}",
        decks.len(),
        config.decks_dir.display(),
        config.output_dir.display()
    );

    let client = ScryfallClient::new(Some(config.scryfall_api_url.as_str()), config.currency)?;
    let summary = process_all_decks(&config, &client, &decks).await;

    let end_time = Local::now();
    info!(
        "Deck pages started at: {}. Finished at: {}. Took: {} seconds for {} decks",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        decks.len()
    );

    if !summary.failures.is_empty() {
        for (deck, e) in &summary.failures {
            error!("Deck {} was not generated: {}", deck, e);
        }
        return Err(format!(
            "{} of {} decks failed",
            summary.failures.len(),
            decks.len()
        )
        .into());
    }
    Ok(())
}

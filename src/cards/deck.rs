use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DeckError;
use crate::utilities::config::Config;
use crate::utilities::constants::{DEFAULT_DECKS, NO_COMMANDER, UPDATED_CSV_SUFFIX};
use crate::utilities::file_management::load_from_json_file;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default = "no_commander")]
    pub commander: String,
    pub icon: String,
}

fn no_commander() -> String {
    NO_COMMANDER.to_string()
}

impl Deck {
    pub fn new(name: &str, commander: &str, icon: &str) -> Self {
        Deck {
            name: name.to_string(),
            commander: commander.to_string(),
            icon: icon.to_string(),
        }
    }

    /// The commander to highlight, `None` when the deck is configured with the "None" marker
    pub fn commander(&self) -> Option<&str> {
        if self.commander == NO_COMMANDER {
            None
        } else {
            Some(self.commander.as_str())
        }
    }

    pub fn input_csv_path(&self, decks_dir: &Path) -> PathBuf {
        decks_dir.join(format!("{}.csv", self.name))
    }

    pub fn updated_csv_path(&self, decks_dir: &Path) -> PathBuf {
        decks_dir.join(format!("{}{}.csv", self.name, UPDATED_CSV_SUFFIX))
    }

    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.name)
    }
}

pub fn default_decks() -> Vec<Deck> {
    DEFAULT_DECKS
        .iter()
        .map(|(name, commander, icon)| Deck::new(name, commander, icon))
        .collect()
}

pub fn load_decks(config: &Config) -> Result<Vec<Deck>, DeckError> {
    match &config.decks_file {
        Some(path) => Ok(load_from_json_file::<Vec<Deck>>(path)?),
        None => Ok(default_decks()),
    }
}

use std::{env, path::PathBuf};

use log::error;

use crate::cards::currency::Currency;
use crate::utilities::constants::{
    DEFAULT_CSS_FILE, DEFAULT_DECKS_DIR, DEFAULT_OUTPUT_DIR, SCRYFALL_API_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub decks_dir: PathBuf,
    pub output_dir: PathBuf,
    pub css_file: String,
    pub scryfall_api_url: String,
    pub decks_file: Option<PathBuf>,
    pub currency: Currency,
    pub generate_index: bool,
    pub write_stylesheet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks_dir: PathBuf::from(DEFAULT_DECKS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            css_file: DEFAULT_CSS_FILE.to_string(),
            scryfall_api_url: SCRYFALL_API_URL.to_string(),
            decks_file: None,
            currency: Currency::EUR,
            generate_index: false,
            write_stylesheet: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.update_from(|key| env::var(key).ok());
    }

    pub fn update_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(decks_dir) = var("DECKS_DIR") {
            self.decks_dir = PathBuf::from(decks_dir);
        }
        if let Some(output_dir) = var("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }
        if let Some(css_file) = var("CSS_FILE") {
            if !css_file.trim().is_empty() {
                self.css_file = css_file.trim().to_string();
            }
        }
        if let Some(api_url) = var("SCRYFALL_API_URL") {
            self.scryfall_api_url = api_url.trim_end_matches('/').to_string();
        }
        // A bad path fails at startup when the decks are loaded
        if let Some(decks_file) = var("DECKS_FILE") {
            if !decks_file.trim().is_empty() {
                self.decks_file = Some(PathBuf::from(decks_file.trim()));
            }
        }
        if let Some(currency) = var("PRICE_CURRENCY") {
            match currency.to_uppercase().parse() {
                Ok(currency) => self.currency = currency,
                Err(_) => error!(
                    "Unsupported price currency '{}', keeping {}",
                    currency, self.currency
                ),
            }
        }
        if let Some(generate_index) = var("GENERATE_INDEX") {
            self.generate_index = generate_index == "1";
        }
        if let Some(write_stylesheet) = var("WRITE_STYLESHEET") {
            self.write_stylesheet = write_stylesheet == "1";
        }
    }
}

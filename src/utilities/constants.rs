pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const SCRYFALL_NAMED_CARD_PATH: &str = "/cards/named";

pub const DEFAULT_DECKS_DIR: &str = "Decks";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_CSS_FILE: &str = "style.css";

pub const UPDATED_CSV_SUFFIX: &str = "-updated";
pub const INDEX_PAGE_NAME: &str = "index.html";

// Marker for decks without a commander, kept literal for compatibility with existing deck lists
pub const NO_COMMANDER: &str = "None";

pub const NAME_COLUMN: &str = "Name";
pub const QUANTITY_COLUMN: &str = "Quantity";
pub const SET_NAME_COLUMN: &str = "Set name";
pub const SET_CODE_COLUMN: &str = "Set code";
pub const COLLECTOR_NUMBER_COLUMN: &str = "Collector number";
pub const RARITY_COLUMN: &str = "Rarity";
pub const PURCHASE_PRICE_COLUMN: &str = "Purchase price";
pub const PURCHASE_PRICE_CURRENCY_COLUMN: &str = "Purchase price currency";

pub const TYPE_COLUMN: &str = "Type";
pub const SCRYFALL_URL_COLUMN: &str = "Scryfall URL";
pub const IMAGE_URL_COLUMN: &str = "Image URL";
pub const MARKET_PRICE_COLUMN: &str = "Prix";

pub const DERIVED_COLUMNS: [&str; 4] = [
    TYPE_COLUMN,
    SCRYFALL_URL_COLUMN,
    IMAGE_URL_COLUMN,
    MARKET_PRICE_COLUMN,
];

pub const FONT_AWESOME_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.1/css/all.min.css";
pub const GOOGLE_FONTS_CSS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Belleza&family=Cinzel&family=MedievalSharp&display=swap";
pub const HOME_ICON: &str = "fas fa-home";

/// (name, commander, icon) of the decks rendered when no deck file is configured
pub const DEFAULT_DECKS: [(&str, &str, &str); 7] = [
    ("Arahbo", "Arahbo, Roar of the World", "fas fa-cat"),
    ("Brille-Paume", "Bright-Palm, Soul Awakener", "fas fa-star"),
    (
        "Ajani protecteur valeureux",
        "Ajani, Valiant Protector",
        "fas fa-shield-alt",
    ),
    (
        "Nissa artisane de la nature",
        "Nissa, Nature's Artisan",
        "fas fa-leaf",
    ),
    ("ManaBox_Collection", NO_COMMANDER, "fas fa-book"),
    ("Wishlist Arahbo", NO_COMMANDER, "fas fa-star"),
    ("Wishlist Brille-Paume", NO_COMMANDER, "fas fa-star"),
];

// Written to the market price column when Scryfall has no price in the configured currency
pub const MISSING_PRICE: &str = "N/A";
pub const UNRESOLVED_GROUP_TITLE: &str = "Unresolved";

// Existing stylesheets style the button by this id
pub const BACK_TO_TOP_BUTTON_ID: &str = "myBtn";

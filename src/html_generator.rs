use std::path::Path;

use log::info;

use crate::card_groups::{group_by_type, CardGroup};
use crate::cards::{
    collection_card::CollectionCard, currency::Currency, deck::Deck, scryfallcard::ScryfallCard,
};
use crate::utilities::constants::{
    BACK_TO_TOP_BUTTON_ID, FONT_AWESOME_CSS_URL, GOOGLE_FONTS_CSS_URL, HOME_ICON, INDEX_PAGE_NAME,
};
use crate::utilities::file_management::write_to_file;
use crate::utilities::string_manipulators::{capitalize, capitalize_first, escape_html};

/// Commander highlighted above the card list. `card` is None when the lookup failed.
#[derive(Debug, Clone, Copy)]
pub struct Commander<'a> {
    pub name: &'a str,
    pub card: Option<&'a ScryfallCard>,
}

pub struct DeckPage<'a> {
    pub deck: &'a Deck,
    pub decks: &'a [Deck],
    pub cards: &'a [CollectionCard],
    pub commander: Option<Commander<'a>>,
    pub css_file: &'a str,
    pub currency: Currency,
}

fn deck_href(deck: &Deck) -> String {
    format!("{}.html", urlencoding::encode(&deck.name))
}

/// "1.49" -> "1.49 €", blank -> "-", anything else or an unknown currency is shown as is
fn format_amount(amount: &str, currency: Option<Currency>) -> String {
    let amount = amount.trim();
    if amount.is_empty() {
        return "-".to_string();
    }
    match currency {
        Some(currency) if amount.parse::<f64>().is_ok() => {
            format!("{} {}", escape_html(amount), currency.symbol())
        }
        _ => escape_html(amount),
    }
}

pub fn generate_html_header(title: &str, css_file: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{fonts}" rel="stylesheet">
    <link rel="stylesheet" href="{css}">
    <link rel="stylesheet" href="{font_awesome}">
    <style>
{popup_css}
    </style>
</head>
<body>
"#,
        title = escape_html(title),
        fonts = GOOGLE_FONTS_CSS_URL,
        css = escape_html(css_file),
        font_awesome = FONT_AWESOME_CSS_URL,
        popup_css = include_str!("../static/deck_page/popup.css"),
    )
}

pub fn generate_nav_menu(decks: &[Deck]) -> String {
    let mut nav = format!(
        "    <nav><ul>\n        <li><a href=\"{}\"><i class=\"{}\"></i> Home</a></li>\n",
        INDEX_PAGE_NAME, HOME_ICON
    );
    for deck in decks {
        nav.push_str(&format!(
            "        <li><a href=\"{}\"><i class=\"{}\"></i> {}</a></li>\n",
            deck_href(deck),
            escape_html(&deck.icon),
            escape_html(&capitalize(&deck.name)),
        ));
    }
    nav.push_str("    </ul></nav>\n");
    nav
}

pub fn generate_title(deck: &Deck, total_cards: usize) -> String {
    let title = match deck.commander() {
        Some(_) => format!("My Magic: The Gathering deck - {}", deck.name),
        None => format!("Magic: The Gathering - {}", deck.name),
    };
    format!(
        "    <h1>{}</h1>\n    <h2 class=\"total\">Total cards: {}</h2>\n",
        escape_html(&title),
        total_cards
    )
}

pub fn generate_commander_section(commander: &Commander) -> String {
    let name = escape_html(commander.name);
    let body = match commander.card {
        Some(card) => format!(
            r#"            <img src="{image}" alt="{name}" onclick="openPopup(this.src)"/>
            <a href="{url}">View on Scryfall</a><br>
"#,
            image = escape_html(&card.image_url),
            url = escape_html(&card.scryfall_uri),
        ),
        None => "            <p>No Scryfall details found for this commander.</p>\n".to_string(),
    };
    format!(
        r#"    <h2>Commander: {name}</h2>
    <div class="cards-container">
        <div class="card">
{body}        </div>
    </div>
"#
    )
}

pub fn generate_card_tile(card: &CollectionCard, currency: Currency) -> String {
    let name = escape_html(&card.name);
    let image = if card.image_url.is_empty() {
        String::new()
    } else {
        format!(
            "            <img src=\"{}\" alt=\"{}\" onclick=\"openPopup(this.src)\"/>\n",
            escape_html(&card.image_url),
            name
        )
    };
    let scryfall_link = if card.scryfall_url.is_empty() {
        String::new()
    } else {
        format!(
            "            <a href=\"{}\">View on Scryfall</a><br>\n",
            escape_html(&card.scryfall_url)
        )
    };
    format!(
        r#"        <div class="card">
            <h3>{name}</h3>
{image}            <p>Set: {set_name} ({set_code})<br>
            Rarity: {rarity}<br>
{scryfall_link}            Price: {purchase_price} | Market price: {market_price}</p>
            <p>Card no. {collector_number}<br>
            Quantity: {quantity}</p>
        </div>
"#,
        set_name = escape_html(&card.set_name),
        set_code = escape_html(&card.set_code),
        rarity = escape_html(&capitalize_first(&card.rarity)),
        purchase_price = format_amount(&card.purchase_price, card.purchase_price_currency),
        market_price = format_amount(&card.market_price, Some(currency)),
        collector_number = escape_html(&card.collector_number),
        quantity = escape_html(&card.quantity),
    )
}

pub fn generate_type_section(group: &CardGroup, currency: Currency) -> String {
    let mut section = format!(
        "    <h2>{}</h2>\n    <div class=\"cards-container\">\n",
        escape_html(&group.heading())
    );
    for card in &group.cards {
        section.push_str(&generate_card_tile(card, currency));
    }
    section.push_str("    </div>\n");
    section
}

pub fn generate_html_footer() -> String {
    format!(
        r#"    <div id="popup-img-container" onclick="closePopup()">
        <img id="popup-img" src="" alt="Enlarged card"/>
    </div>
    <button onclick="scrollToTop()" id="{button_id}" title="Back to top">
        <i class="fas fa-chevron-up"></i>
    </button>
    <script>
{script}
    </script>
</body>
</html>
"#,
        button_id = BACK_TO_TOP_BUTTON_ID,
        script = include_str!("../static/deck_page/deck_page.js"),
    )
}

pub fn generate_page_content(page: &DeckPage) -> String {
    let title = format!("{} - Magic: The Gathering collection", page.deck.name);
    let mut content = generate_html_header(&title, page.css_file);
    content.push_str(&generate_title(page.deck, page.cards.len()));
    content.push_str(&generate_nav_menu(page.decks));

    if let Some(commander) = &page.commander {
        content.push_str(&generate_commander_section(commander));
    }

    for group in group_by_type(page.cards) {
        content.push_str(&generate_type_section(&group, page.currency));
    }

    content.push_str(&generate_html_footer());
    content
}

/// Landing page linking every deck page, the target of the "Home" entry of the menu
pub fn generate_index_page(decks: &[Deck], css_file: &str) -> String {
    let mut content = generate_html_header("Magic: The Gathering collection", css_file);
    content.push_str("    <h1>Magic: The Gathering collection</h1>\n");
    content.push_str(&generate_nav_menu(decks));
    content.push_str(&generate_html_footer());
    content
}

pub fn write_page(path: &Path, content: &str) -> std::io::Result<()> {
    write_to_file(path, content)?;
    info!("HTML file {} generated", path.display());
    Ok(())
}

/// Writes the bundled stylesheet unless a stylesheet with that name already exists
pub fn ensure_stylesheet(output_dir: &Path, css_file: &str) -> std::io::Result<bool> {
    let path = output_dir.join(css_file);
    if path.exists() {
        return Ok(false);
    }
    write_to_file(&path, include_str!("../static/deck_page/style.css"))?;
    info!("Wrote default stylesheet to {}", path.display());
    Ok(true)
}

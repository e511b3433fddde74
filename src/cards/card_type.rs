use std::fmt;

const TYPE_LINE_SEPARATOR: &str = " — ";

/// Card type used for grouping: the part of the type line before the subtypes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardType(String);

impl CardType {
    pub fn new(card_type: &str) -> Self {
        CardType(card_type.trim().to_string())
    }

    /// "Legendary Creature — Cat" -> "Legendary Creature", "Land" -> "Land"
    pub fn from_type_line(type_line: &str) -> Self {
        let card_type = type_line
            .split_once(TYPE_LINE_SEPARATOR)
            .map_or(type_line, |(card_type, _)| card_type);
        CardType::new(card_type)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn plural(&self) -> String {
        match self.0.as_str() {
            "Sorcery" => "Sorceries".to_string(),
            other => format!("{}s", other),
        }
    }

    /// "Creature (1)", "Creatures (5)", "Sorceries (3)"
    pub fn heading(&self, count: usize) -> String {
        if count > 1 {
            format!("{} ({})", self.plural(), count)
        } else {
            format!("{} ({})", self.0, count)
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

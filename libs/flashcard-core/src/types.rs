//! Core types for the flashcard viewer.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Answer to a flashcard statement.
///
/// True/false decks use `V` (verdadeiro) and `F` (falso). Anything else is
/// kept verbatim so free-form decks still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Answer {
    True,
    False,
    Text(String),
}

impl Answer {
    /// Normalize a raw cell value.
    ///
    /// `v`/`V` and `f`/`F` (after trimming) become [`Answer::True`] and
    /// [`Answer::False`]; any other text is kept trimmed but otherwise as-is.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "V" => Self::True,
            "F" => Self::False,
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Get the answer as displayed text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::True => "V",
            Self::False => "F",
            Self::Text(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Answer> for String {
    fn from(value: Answer) -> Self {
        match value {
            Answer::Text(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flashcard extracted from one table row.
///
/// Field names on the wire keep the deck's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    #[serde(rename = "afirmacao")]
    pub statement: String,
    #[serde(rename = "resposta")]
    pub answer: Answer,
    #[serde(rename = "explicacao")]
    pub explanation: String,
}

/// Static description of a deck and the markdown file backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    pub id: String,
    pub name: String,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered list of decks available under one base location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeckCatalog {
    decks: Vec<DeckInfo>,
}

impl DeckCatalog {
    /// Build a catalog, rejecting duplicate deck ids.
    pub fn new(decks: Vec<DeckInfo>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for deck in &decks {
            if !seen.insert(deck.id.as_str()) {
                return Err(CatalogError::DuplicateId(deck.id.clone()));
            }
        }
        Ok(Self { decks })
    }

    /// Parse a catalog from a JSON array of deck entries.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let decks: Vec<DeckInfo> = serde_json::from_str(content)?;
        Self::new(decks)
    }

    pub fn find(&self, id: &str) -> Option<&DeckInfo> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    pub fn decks(&self) -> &[DeckInfo] {
        &self.decks
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

/// Build the path of a deck file under a base path.
///
/// Joins `{base_path}decks/{file}` and replaces each doubled slash with one
/// in a single left-to-right pass, so `"/app/"` bases work with `"/x.md"`.
pub fn deck_path(base_path: &str, file: &str) -> String {
    format!("{}decks/{}", base_path, file).replace("//", "/")
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    /// Get the theme name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Core flashcard library shared by the deck server and the viewer.
//!
//! Provides:
//! - Markdown table parser for flashcard decks
//! - Shared types (Flashcard, Answer, DeckInfo, DeckCatalog, Theme)
//! - Theme preference model (PreferenceStore, ThemeController)

pub mod error;
pub mod parser;
pub mod theme;
pub mod types;

pub use error::{CatalogError, ParseError, Result, StoreError};
pub use parser::{parse, parse_report, ParseReport, SkipReason, SkippedRow};
pub use theme::{MemoryStore, PreferenceStore, RootAttributes, ThemeController};
pub use types::{deck_path, Answer, DeckCatalog, DeckInfo, Flashcard, Theme};

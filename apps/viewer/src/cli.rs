use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flashcard_core::Theme;

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(about = "Browse flashcard decks written as markdown tables")]
#[command(version)]
pub struct Cli {
    /// Base URL the deck files are served under
    #[arg(
        long,
        global = true,
        env = "FLASHCARDS_BASE_URL",
        default_value = "http://127.0.0.1:3000/"
    )]
    pub base_url: String,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true, env = "FLASHCARDS_PREFS")]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the decks in the catalog
    Decks,
    /// Load a deck and print its cards
    Show {
        /// Deck id from the catalog
        deck_id: String,
        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

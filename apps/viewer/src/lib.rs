//! Command-line flashcard viewer.
//!
//! Fetches a deck catalog and deck files from a base URL, parses the
//! markdown tables into flashcards and prints them. The light/dark theme
//! preference is kept in a JSON preferences file.

pub mod cli;
pub mod loader;
pub mod prefs;

use std::fmt::Write as _;

use clap::Parser;
use flashcard_core::{DeckInfo, Flashcard, Theme, ThemeController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, ThemeCommands};
use crate::loader::DeckLoader;
use crate::prefs::{default_prefs_path, JsonFileStore};

/// Log filter used when RUST_LOG is unset. Logs go to stderr.
const DEFAULT_LOG_FILTER: &str = "info";

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decks => {
            let loader = DeckLoader::new(&cli.base_url)?;
            let catalog = loader.fetch_catalog().await?;
            print!("{}", format_catalog(catalog.decks()));
        }
        Commands::Show { deck_id, json } => {
            let mut loader = DeckLoader::new(&cli.base_url)?;
            let catalog = loader.fetch_catalog().await?;
            let deck = catalog
                .find(&deck_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("deck {:?} not found in catalog", deck_id))?;

            let state = loader.load_deck(&deck).await;
            if let Some(error) = &state.error {
                anyhow::bail!("{}", error);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&state.cards)?);
            } else {
                print!("{}", format_cards(&deck, &state.cards));
            }
        }
        Commands::Theme { command } => {
            let path = cli.prefs.unwrap_or_else(default_prefs_path);
            let mut controller = ThemeController::new(JsonFileStore::open(&path)?);

            let theme = match command.unwrap_or(ThemeCommands::Show) {
                ThemeCommands::Show => controller.current(),
                ThemeCommands::Toggle => controller.toggle()?,
                ThemeCommands::Set { theme } => {
                    let theme = Theme::from(theme);
                    controller.set_theme(theme)?;
                    theme
                }
            };
            println!("{}", theme);
        }
    }

    Ok(())
}

/// One line per deck: id, name and optional description.
pub fn format_catalog(decks: &[DeckInfo]) -> String {
    let mut out = String::new();
    for deck in decks {
        match &deck.description {
            Some(description) => {
                let _ = writeln!(out, "{}\t{}\t{}", deck.id, deck.name, description);
            }
            None => {
                let _ = writeln!(out, "{}\t{}", deck.id, deck.name);
            }
        }
    }
    out
}

/// Plain-text listing of a deck's cards.
pub fn format_cards(deck: &DeckInfo, cards: &[Flashcard]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} cards)", deck.name, cards.len());
    for card in cards {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", card.id, card.statement);
        let _ = writeln!(out, "  answer: {}", card.answer);
        if !card.explanation.is_empty() {
            let _ = writeln!(out, "  {}", card.explanation);
        }
    }
    out
}

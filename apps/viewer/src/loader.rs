//! Deck loader: fetches deck files over HTTP and parses them.

use std::time::Duration;

use flashcard_core::{deck_path, CatalogError, DeckCatalog, DeckInfo, Flashcard, ParseError};
use reqwest::{Client, Response, Url};
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("flashcards/", env!("CARGO_PKG_VERSION"));

/// Catalog file fetched from the decks directory.
pub const CATALOG_FILE: &str = "decks.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch deck file: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid base URL {0:?}")]
    BaseUrl(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Observable state of the most recent deck load.
#[derive(Debug, Clone, Default)]
pub struct LoaderState {
    pub cards: Vec<Flashcard>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct DeckLoader {
    client: Client,
    base_url: Url,
    state: LoaderState,
}

impl DeckLoader {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let base_url =
            Url::parse(base_url).map_err(|_| LoadError::BaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(LoadError::BaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            state: LoaderState::default(),
        })
    }

    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    /// URL of a file inside the decks directory.
    pub fn deck_url(&self, file: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = deck_path(self.base_url.path(), file);
        url.set_path(&path);
        url
    }

    /// Fetch and parse the deck catalog.
    pub async fn fetch_catalog(&self) -> Result<DeckCatalog, LoadError> {
        let decks: Vec<DeckInfo> = self.get(CATALOG_FILE).await?.json().await?;
        Ok(DeckCatalog::new(decks)?)
    }

    /// Load a deck, replacing the current state.
    ///
    /// Failures end up in `state().error` with the cards cleared; nothing is
    /// retried.
    pub async fn load_deck(&mut self, deck: &DeckInfo) -> &LoaderState {
        self.state.is_loading = true;
        self.state.error = None;
        self.state.cards.clear();

        match self.fetch_deck(deck).await {
            Ok(cards) => {
                tracing::info!(deck = %deck.id, cards = cards.len(), "deck loaded");
                self.state.cards = cards;
            }
            Err(e) => {
                tracing::error!(deck = %deck.id, "failed to load or parse deck: {}", e);
                self.state.error = Some(e.to_string());
            }
        }

        self.state.is_loading = false;
        &self.state
    }

    async fn fetch_deck(&self, deck: &DeckInfo) -> Result<Vec<Flashcard>, LoadError> {
        let text = self.fetch_text(&deck.file).await?;
        Ok(flashcard_core::parse(&text)?)
    }

    async fn fetch_text(&self, file: &str) -> Result<String, LoadError> {
        Ok(self.get(file).await?.text().await?)
    }

    /// GET a file under the decks directory; non-success statuses are errors.
    async fn get(&self, file: &str) -> Result<Response, LoadError> {
        let url = self.deck_url(file);
        tracing::debug!(%url, "fetching deck file");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response)
    }
}

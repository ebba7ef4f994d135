//! Deck endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use flashcard_core::{parse_report, DeckInfo, Flashcard, SkippedRow};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DeckListResponse {
    pub decks: Vec<DeckInfo>,
}

#[derive(Debug, Serialize)]
pub struct DeckCardsResponse {
    pub deck: DeckInfo,
    pub cards: Vec<Flashcard>,
    pub skipped: Vec<SkippedRow>,
}

/// GET /api/decks
pub async fn list(State(state): State<AppState>) -> Json<DeckListResponse> {
    Json(DeckListResponse {
        decks: state.catalog.decks().to_vec(),
    })
}

/// GET /api/decks/:id/cards
pub async fn cards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<DeckCardsResponse>> {
    let deck = state
        .catalog
        .find(&deck_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("deck {}", deck_id)))?;

    let file_path = state.decks_dir.join(deck.file.trim_start_matches('/'));
    let content = tokio::fs::read_to_string(&file_path)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ApiError::NotFound(format!("deck file {}", deck.file)),
            _ => ApiError::Io(e),
        })?;

    let report = parse_report(&content)?;
    for skipped in &report.skipped {
        tracing::warn!(deck = %deck.id, "{}", skipped);
    }

    Ok(Json(DeckCardsResponse {
        deck,
        cards: report.cards,
        skipped: report.skipped,
    }))
}

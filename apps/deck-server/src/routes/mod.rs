//! HTTP route handlers

pub mod decks;

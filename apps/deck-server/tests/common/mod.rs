//! Common test utilities for deck server integration tests.
//!
//! Each TestContext owns a temporary decks directory with a catalog and a
//! few deck files, so the tests need no external setup.

pub mod fixtures;

use axum::Router;
use tempfile::TempDir;

use deck_server::{build_router, AppState};

/// Test context holding the temporary decks directory and the router.
pub struct TestContext {
    _dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a context with the default fixture decks.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fixtures::write_decks(dir.path());

        let state = AppState::load(dir.path())
            .await
            .expect("Failed to load test catalog");

        Self {
            _dir: dir,
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that abort parsing of a whole deck document.
///
/// Problems confined to a single row never end up here; those rows are
/// skipped and reported through [`crate::parser::SkippedRow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no table found in the markdown document")]
    NoTable,

    #[error("the table contains no flashcard rows (header only or empty)")]
    NoDataRows,

    #[error(
        "invalid table header: missing {}; expected columns \"id\", \"afirmação\", \"resposta\", \"explicação\"",
        quote_list(.missing)
    )]
    InvalidHeader { missing: Vec<String> },
}

/// Errors raised while loading a deck catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate deck id {0:?} in catalog")]
    DuplicateId(String),
}

/// Errors raised by preference stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_header_lists_missing_columns() {
        let error = ParseError::InvalidHeader {
            missing: vec!["afirmação".to_string(), "resposta".to_string()],
        };
        assert!(error
            .to_string()
            .starts_with("invalid table header: missing \"afirmação\", \"resposta\";"));
    }

    #[test]
    fn duplicate_id_display() {
        let error = CatalogError::DuplicateId("historia".to_string());
        assert_eq!(error.to_string(), "duplicate deck id \"historia\" in catalog");
    }
}

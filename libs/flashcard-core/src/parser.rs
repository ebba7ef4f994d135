//! Markdown table parser for flashcard decks.
//!
//! # Format
//! ```markdown
//! | id | afirmação                     | resposta | explicação                  |
//! |----|-------------------------------|----------|-----------------------------|
//! | 1  | Rust has a garbage collector. | F        | Memory is freed by ownership. |
//! | 2  | `&mut T` is an exclusive borrow. | V     |                             |
//! ```
//!
//! Only the first table in the document is read. Header names are matched
//! case-insensitively and may appear in any order; extra columns are ignored.
//! Rows that cannot form a card are skipped with a warning instead of failing
//! the whole deck.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::types::{Answer, Flashcard};

const ID_COLUMN: &str = "id";
const STATEMENT_COLUMN: &str = "afirmação";
const ANSWER_COLUMN: &str = "resposta";
const EXPLANATION_COLUMN: &str = "explicação";

/// Parse a markdown deck into flashcards.
///
/// Skipped rows are logged at warn level.
pub fn parse(markdown: &str) -> Result<Vec<Flashcard>> {
    let report = parse_report(markdown)?;
    for skipped in &report.skipped {
        tracing::warn!(row = skipped.row, "{}", skipped);
    }
    Ok(report.cards)
}

/// Parse a markdown deck, keeping track of the rows that were dropped.
pub fn parse_report(markdown: &str) -> Result<ParseReport> {
    let rows = first_table_rows(markdown).ok_or(ParseError::NoTable)?;

    // rows[0] is the header
    if rows.len() <= 1 {
        return Err(ParseError::NoDataRows);
    }

    let header: Vec<String> = rows[0].iter().map(|cell| cell.to_lowercase()).collect();
    let columns = ColumnMap::resolve(&header)?;

    let mut report = ParseReport::default();
    for (i, cells) in rows.iter().enumerate().skip(1) {
        let row = i + 1;
        match columns.build_card(cells, i) {
            Ok(card) => report.cards.push(card),
            Err(reason) => report.skipped.push(SkippedRow { row, reason }),
        }
    }

    Ok(report)
}

/// Cards parsed from a deck together with the rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub cards: Vec<Flashcard>,
    pub skipped: Vec<SkippedRow>,
}

/// A table row that did not produce a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Row number within the table, counting the header as row 1.
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SkipReason {
    InsufficientCells { expected: usize, found: usize },
    MissingStatementOrAnswer,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            SkipReason::InsufficientCells { expected, found } => write!(
                f,
                "table row {} has {} cells, expected at least {}; row ignored",
                self.row, found, expected
            ),
            SkipReason::MissingStatementOrAnswer => write!(
                f,
                "card on table row {} ignored: missing statement or answer",
                self.row
            ),
        }
    }
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    id: usize,
    statement: usize,
    answer: usize,
    explanation: usize,
}

impl ColumnMap {
    fn resolve(header: &[String]) -> Result<Self> {
        let position = |name: &str| header.iter().position(|cell| cell == name);

        let id = position(ID_COLUMN);
        let statement = position(STATEMENT_COLUMN);
        let answer = position(ANSWER_COLUMN);
        let explanation = position(EXPLANATION_COLUMN);

        match (id, statement, answer, explanation) {
            (Some(id), Some(statement), Some(answer), Some(explanation)) => Ok(Self {
                id,
                statement,
                answer,
                explanation,
            }),
            _ => {
                let missing = [
                    (ID_COLUMN, id),
                    (STATEMENT_COLUMN, statement),
                    (ANSWER_COLUMN, answer),
                    (EXPLANATION_COLUMN, explanation),
                ]
                .into_iter()
                .filter(|(_, index)| index.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
                Err(ParseError::InvalidHeader { missing })
            }
        }
    }

    fn min_cells(&self) -> usize {
        self.id
            .max(self.statement)
            .max(self.answer)
            .max(self.explanation)
            + 1
    }

    /// Build a card from a body row. `index` is the 1-based body row index
    /// used for placeholder ids.
    fn build_card(
        &self,
        cells: &[String],
        index: usize,
    ) -> std::result::Result<Flashcard, SkipReason> {
        let expected = self.min_cells();
        if cells.len() < expected {
            return Err(SkipReason::InsufficientCells {
                expected,
                found: cells.len(),
            });
        }

        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or_default();

        let id = match cell(self.id) {
            "" => format!("card-{}", index),
            id => id.to_string(),
        };
        let card = Flashcard {
            id,
            statement: cell(self.statement).to_string(),
            answer: Answer::parse(cell(self.answer)),
            explanation: cell(self.explanation).to_string(),
        };

        if card.statement.is_empty() || card.answer.is_empty() {
            return Err(SkipReason::MissingStatementOrAnswer);
        }
        Ok(card)
    }
}

/// Collect the trimmed text of every cell of the first table, header first.
///
/// Returns `None` when the document has no table.
fn first_table_rows(markdown: &str) -> Option<Vec<Vec<String>>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();
    let mut in_table = false;
    let mut in_head = false;
    let mut in_cell = false;
    // Alt text of images is not part of the cell text.
    let mut image_depth = 0usize;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Table(_)) => {
                in_table = true;
            }
            Event::End(TagEnd::Table) => {
                return Some(rows);
            }
            _ if !in_table => {}
            Event::Start(Tag::TableHead) => {
                in_head = true;
                current_row.clear();
            }
            Event::End(TagEnd::TableHead) => {
                in_head = false;
                rows.push(std::mem::take(&mut current_row));
            }
            Event::Start(Tag::TableRow) => {
                if !in_head {
                    current_row.clear();
                }
            }
            Event::End(TagEnd::TableRow) => {
                if !in_head {
                    rows.push(std::mem::take(&mut current_row));
                }
            }
            Event::Start(Tag::Image { .. }) => {
                image_depth += 1;
            }
            Event::End(TagEnd::Image) => {
                image_depth = image_depth.saturating_sub(1);
            }
            Event::Start(Tag::TableCell) => {
                in_cell = true;
                image_depth = 0;
                current_cell.clear();
            }
            Event::End(TagEnd::TableCell) => {
                in_cell = false;
                current_row.push(current_cell.trim().to_string());
            }
            // Raw HTML is not interpreted; it counts as literal cell text.
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text)
                if in_cell && image_depth == 0 =>
            {
                current_cell.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_cell && image_depth == 0 => {
                current_cell.push(' ');
            }
            _ => {}
        }
    }

    None
}

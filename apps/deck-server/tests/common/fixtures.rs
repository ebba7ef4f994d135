//! Fixture decks written into the temporary decks directory.

use std::path::Path;

pub const CATALOG: &str = r#"[
    {"id": "rust", "name": "Rust", "file": "rust.md", "description": "Basics"},
    {"id": "broken", "name": "Broken", "file": "broken.md"},
    {"id": "ghost", "name": "Ghost", "file": "missing.md"}
]"#;

/// Generate a deck table with `num_cards` rows.
pub fn sample_deck(num_cards: usize) -> String {
    let rows: String = (0..num_cards)
        .map(|i| {
            format!(
                "| {} | Statement {}. | {} | Explanation {}. |\n",
                i + 1,
                i + 1,
                if i % 2 == 0 { "v" } else { "F" },
                i + 1
            )
        })
        .collect();
    format!(
        "# Sample\n\n| id | afirmação | resposta | explicação |\n|---|---|---|---|\n{}",
        rows
    )
}

pub fn write_decks(dir: &Path) {
    let mut rust = sample_deck(3);
    rust.push_str("| 4 | Truncated row. |\n");

    std::fs::write(dir.join("decks.json"), CATALOG).expect("write catalog");
    std::fs::write(dir.join("rust.md"), rust).expect("write rust deck");
    std::fs::write(dir.join("broken.md"), "# Nothing to see\n").expect("write broken deck");
}

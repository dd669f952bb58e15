//! # Block Classification
//!
//! Splits a message into lines and turns each line into exactly one
//! [`Block`], delegating emphasised text to the inline formatter.
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: named glyph sets (`Bullet`, `Marker`)
//! - **`rules`**: the ordered `RULES` table, one function per variant
//! - **`classify`**: `LineClassifier`, which walks the table for a line
//!
//! ## Precedence
//!
//! `blank`, `bold_bullet`, `simple_bullet`, `header`, `emoji_header`,
//! `plain`. A bullet whose text opens with a bold run is a `BoldBullet`,
//! never a `Header`, because bullets are checked first.

pub mod classify;
pub mod kinds;
pub mod rules;
pub mod types;

pub use classify::LineClassifier;
pub use types::Block;

use crate::parsing::{lines::lines, options::FormatOptions};

/// Classifies every line of `text` with default options.
pub fn classify(text: &str) -> Vec<Block> {
    classify_with(text, &FormatOptions::default())
}

/// Classifies every line of `text`.
///
/// Returns one block per `\n`-separated line, in order. Lines are never
/// dropped or merged, so two blank lines give two `Blank` blocks.
pub fn classify_with(text: &str, options: &FormatOptions) -> Vec<Block> {
    let classifier = LineClassifier::new(options);
    lines(text).map(|line| classifier.classify(&line)).collect()
}

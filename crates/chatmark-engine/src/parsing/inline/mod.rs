//! # Inline Formatting
//!
//! Cursor-based splitting of a single line into inline segments.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSegment` enum (Text, Bold, Link) and `surface()`
//! - **`kinds`**: Inline types with owned delimiters (Bold, Url)
//! - **`cursor`**: `Cursor` for char-by-char scanning with byte positions
//! - **`parser`**: `format_inline()` entry point with `try_parse_*` helpers
//!
//! ## Guarantees
//!
//! Formatting is total: malformed markers degrade to text. Concatenating
//! `surface()` of every segment reproduces the input exactly.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{format_inline, format_inline_with};
pub use types::{InlineSegment, surface};

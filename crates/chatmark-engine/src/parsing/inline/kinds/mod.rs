//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = "**"`, non-greedy, no nesting
//! - **`Url`**: `SCHEMES = ["https://", "http://"]`, runs to the next whitespace
//!
//! The parser calls these types; it never hardcodes `**` or a scheme.

pub mod bold;
pub mod url;

pub use bold::Bold;
pub use url::Url;

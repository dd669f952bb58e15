//! # Rendering
//!
//! Turns a [`FormattedMessage`](crate::FormattedMessage) into something a
//! reader sees. Parsing never depends on anything here.
//!
//! - **`html`**: HTML fragment; links open in a new browsing context
//! - **`plain`**: plain text with bullet glyphs and markers removed

pub mod html;
pub mod plain;

pub use html::to_html;
pub use plain::to_plain_text;

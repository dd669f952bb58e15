pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    Block, FormatOptions, FormattedMessage, InlineSegment, LinkPolicy, MessageFormatter, classify,
    format_inline, format_message,
};
pub use render::{to_html, to_plain_text};

//! # Message Parsing
//!
//! Turns raw message text into an ordered list of [`Block`]s.
//!
//! ## Pipeline
//!
//! 1. **Lines** (`lines`): the input is split on `\n`; each line is trimmed
//! 2. **Blocks** (`blocks`): each line is matched against an ordered rule
//!    table and becomes exactly one `Block`
//! 3. **Inline** (`inline`): text that may carry emphasis is split into
//!    `Text`, `Bold` and `Link` segments
//!
//! Every step is a pure function of its input. Nothing is cached or shared
//! between calls, so formatting can run on any number of threads at once.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod options;

use serde::Serialize;

pub use blocks::{Block, classify, classify_with};
pub use inline::{InlineSegment, format_inline, format_inline_with};
pub use options::{FormatOptions, LinkPolicy};

/// The result of formatting one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMessage {
    /// Styling hint supplied by the caller, passed through untouched.
    pub class_hint: Option<String>,
    /// One block per input line, in order.
    pub blocks: Vec<Block>,
}

/// Formats messages with a fixed set of [`FormatOptions`].
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    options: FormatOptions,
}

impl MessageFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Formats `text` into blocks. `class_hint` never influences parsing.
    pub fn format(&self, text: &str, class_hint: Option<&str>) -> FormattedMessage {
        FormattedMessage {
            class_hint: class_hint.map(str::to_string),
            blocks: classify_with(text, &self.options),
        }
    }
}

/// Formats `text` with default options.
pub fn format_message(text: &str, class_hint: Option<&str>) -> FormattedMessage {
    MessageFormatter::default().format(text, class_hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_hint_is_passed_through() {
        let with = format_message("**Title**", Some("assistant-bubble"));
        let without = format_message("**Title**", None);
        assert_eq!(with.class_hint.as_deref(), Some("assistant-bubble"));
        assert_eq!(with.blocks, without.blocks);
    }

    #[test]
    fn formatter_applies_options() {
        let formatter = MessageFormatter::new(FormatOptions {
            extra_markers: vec!["🦉".into()],
            ..FormatOptions::default()
        });
        let message = formatter.format("🦉**Owls**", None);
        assert!(matches!(message.blocks[0], Block::EmojiHeader { .. }));

        let message = format_message("🦉**Owls**", None);
        assert!(matches!(message.blocks[0], Block::Plain { .. }));
    }

    #[test]
    fn formatted_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormattedMessage>();
        assert_send_sync::<MessageFormatter>();
    }
}

use serde::Serialize;

use crate::parsing::inline::InlineSegment;

/// One classified input line.
///
/// Blocks are independent of their neighbours. Variants that may carry
/// emphasis own the already-formatted inline segments of that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// The trimmed line was empty.
    Blank,
    /// `- **Label** rest`: a bullet whose text opens with a bold label.
    BoldBullet {
        /// The bold label, not inline-formatted.
        label: String,
        /// Everything after the label; empty when nothing follows.
        rest: Vec<InlineSegment>,
    },
    /// `- text`: any other bullet.
    SimpleBullet { content: Vec<InlineSegment> },
    /// `**Title**` or `**Title**:` spanning the whole line.
    Header { text: String },
    /// A marker glyph directly followed by a bold run.
    EmojiHeader {
        emoji: String,
        text: String,
        /// Whatever followed the bold run, verbatim.
        trailing: String,
    },
    /// Fallback for every other line.
    Plain { content: Vec<InlineSegment> },
}

impl Block {
    /// Returns true for both bullet variants.
    pub fn is_bullet(&self) -> bool {
        matches!(self, Self::BoldBullet { .. } | Self::SimpleBullet { .. })
    }
}

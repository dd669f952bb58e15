use crate::parsing::{Block, FormattedMessage, InlineSegment};

/// Glyph used for both bullet variants.
pub const BULLET: &str = "•";

/// Renders a message as plain text, one output line per block.
///
/// Bold markers are dropped, bullets are normalised to `•` and links are
/// printed as-is. The class hint is ignored.
pub fn to_plain_text(message: &FormattedMessage) -> String {
    message
        .blocks
        .iter()
        .map(block_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_line(block: &Block) -> String {
    match block {
        Block::Blank => String::new(),
        Block::BoldBullet { label, rest } if rest.is_empty() => format!("{BULLET} {label}"),
        Block::BoldBullet { label, rest } => format!("{BULLET} {label} {}", inline_text(rest)),
        Block::SimpleBullet { content } => format!("{BULLET} {}", inline_text(content)),
        Block::Header { text } => text.clone(),
        Block::EmojiHeader {
            emoji,
            text,
            trailing,
        } => format!("{emoji} {text}{trailing}"),
        Block::Plain { content } => inline_text(content),
    }
}

fn inline_text(segments: &[InlineSegment]) -> String {
    segments.iter().map(InlineSegment::value).collect()
}

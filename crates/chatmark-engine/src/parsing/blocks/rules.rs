//! The ordered rule table used by the classifier.
//!
//! Each rule looks at one trimmed line and either builds a block or
//! declines. Rules are tried in table order and the first block wins, so
//! the order of `RULES` *is* the precedence.

use crate::parsing::{
    inline::{InlineSegment, format_inline_with, kinds::Bold},
    options::FormatOptions,
};

use super::{
    kinds::{Bullet, Marker},
    types::Block,
};

/// Per-call state shared by every rule.
pub struct Context<'a> {
    pub options: &'a FormatOptions,
}

impl Context<'_> {
    fn inline(&self, text: &str) -> Vec<InlineSegment> {
        format_inline_with(text, self.options.link_policy)
    }
}

/// A named classification rule.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str, &Context<'_>) -> Option<Block>,
}

/// Classification rules in precedence order. `plain` never declines.
pub const RULES: &[Rule] = &[
    Rule {
        name: "blank",
        apply: blank,
    },
    Rule {
        name: "bold_bullet",
        apply: bold_bullet,
    },
    Rule {
        name: "simple_bullet",
        apply: simple_bullet,
    },
    Rule {
        name: "header",
        apply: header,
    },
    Rule {
        name: "emoji_header",
        apply: emoji_header,
    },
    Rule {
        name: "plain",
        apply: plain,
    },
];

fn blank(line: &str, _: &Context<'_>) -> Option<Block> {
    line.is_empty().then_some(Block::Blank)
}

/// Bullet glyph, optional whitespace, bold label, optional rest.
fn bold_bullet(line: &str, cx: &Context<'_>) -> Option<Block> {
    let after = Bullet::strip_glyph(line)?.trim_start();
    let (label, len) = Bold::match_prefix(after)?;
    Some(Block::BoldBullet {
        label: label.to_string(),
        rest: cx.inline(after[len..].trim_start()),
    })
}

/// Bullet glyph, at least one whitespace char, then anything.
fn simple_bullet(line: &str, cx: &Context<'_>) -> Option<Block> {
    let after = Bullet::strip_glyph(line)?;
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    Some(Block::SimpleBullet {
        content: cx.inline(after.trim_start()),
    })
}

/// One bold run covering the whole line, optionally closed by a colon.
fn header(line: &str, _: &Context<'_>) -> Option<Block> {
    let (text, len) = Bold::match_prefix(line)?;
    matches!(&line[len..], "" | ":").then(|| Block::Header {
        text: text.to_string(),
    })
}

/// Marker glyph immediately followed by a bold run.
fn emoji_header(line: &str, cx: &Context<'_>) -> Option<Block> {
    let marker_len = Marker::match_prefix(line, &cx.options.extra_markers)?;
    let (emoji, after) = line.split_at(marker_len);
    let (text, len) = Bold::match_prefix(after)?;
    Some(Block::EmojiHeader {
        emoji: emoji.to_string(),
        text: text.to_string(),
        trailing: after[len..].to_string(),
    })
}

fn plain(line: &str, cx: &Context<'_>) -> Option<Block> {
    Some(plain_block(line, cx))
}

pub(super) fn plain_block(line: &str, cx: &Context<'_>) -> Block {
    Block::Plain {
        content: cx.inline(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(name: &str, line: &str) -> Option<Block> {
        let options = FormatOptions::default();
        let cx = Context { options: &options };
        let rule = RULES.iter().find(|r| r.name == name).unwrap();
        (rule.apply)(line, &cx)
    }

    #[test]
    fn table_order_is_precedence_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "blank",
                "bold_bullet",
                "simple_bullet",
                "header",
                "emoji_header",
                "plain"
            ]
        );
    }

    #[test]
    fn bold_bullet_allows_missing_space() {
        assert_eq!(
            apply("bold_bullet", "•**Diet**"),
            Some(Block::BoldBullet {
                label: "Diet".into(),
                rest: vec![],
            })
        );
    }

    #[test]
    fn bold_bullet_declines_when_bold_is_not_first() {
        assert_eq!(apply("bold_bullet", "- see **Diet**"), None);
    }

    #[test]
    fn simple_bullet_requires_whitespace() {
        assert_eq!(apply("simple_bullet", "-5 degrees"), None);
        assert_eq!(apply("simple_bullet", "-"), None);
    }

    #[test]
    fn header_accepts_single_trailing_colon() {
        assert_eq!(
            apply("header", "**Habitat**:"),
            Some(Block::Header {
                text: "Habitat".into()
            })
        );
        assert_eq!(apply("header", "**Habitat**::"), None);
        assert_eq!(apply("header", "**Habitat** :"), None);
    }

    #[test]
    fn header_declines_two_runs() {
        assert_eq!(apply("header", "**A** **B**"), None);
    }

    #[test]
    fn emoji_header_needs_adjacent_bold() {
        assert_eq!(apply("emoji_header", "🌍 **Range**"), None);
        assert_eq!(apply("emoji_header", "🌍 Range"), None);
    }

    #[test]
    fn emoji_header_keeps_trailing_verbatim() {
        assert_eq!(
            apply("emoji_header", "📍**Seen at** **Kew**, 2 days ago"),
            Some(Block::EmojiHeader {
                emoji: "📍".into(),
                text: "Seen at".into(),
                trailing: " **Kew**, 2 days ago".into(),
            })
        );
    }

    #[test]
    fn plain_never_declines() {
        assert!(apply("plain", "").is_some());
        assert!(apply("plain", "**").is_some());
    }
}

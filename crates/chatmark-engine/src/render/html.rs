use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{Block, FormattedMessage, InlineSegment};

/// Renders a message as an HTML fragment wrapped in one `<div>`.
///
/// Runs of consecutive bullets share a `<ul>`. The class hint, if any,
/// becomes the `class` attribute of the wrapper.
pub fn to_html(message: &FormattedMessage) -> String {
    let mut out = match &message.class_hint {
        Some(class) => format!("<div class=\"{}\">", encode_double_quoted_attribute(class)),
        None => "<div>".to_string(),
    };

    let mut in_list = false;
    for block in &message.blocks {
        if block.is_bullet() != in_list {
            out.push_str(if in_list { "</ul>" } else { "<ul>" });
            in_list = !in_list;
        }
        push_block(&mut out, block);
    }
    if in_list {
        out.push_str("</ul>");
    }

    out.push_str("</div>");
    out
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Blank => out.push_str("<br>"),
        Block::BoldBullet { label, rest } => {
            out.push_str("<li><strong>");
            out.push_str(&encode_text(label));
            out.push_str("</strong>");
            if !rest.is_empty() {
                out.push(' ');
                push_inline(out, rest);
            }
            out.push_str("</li>");
        }
        Block::SimpleBullet { content } => {
            out.push_str("<li>");
            push_inline(out, content);
            out.push_str("</li>");
        }
        Block::Header { text } => {
            out.push_str("<h3>");
            out.push_str(&encode_text(text));
            out.push_str("</h3>");
        }
        Block::EmojiHeader {
            emoji,
            text,
            trailing,
        } => {
            out.push_str("<h3><span class=\"emoji\">");
            out.push_str(&encode_text(emoji));
            out.push_str("</span> <strong>");
            out.push_str(&encode_text(text));
            out.push_str("</strong>");
            out.push_str(&encode_text(trailing));
            out.push_str("</h3>");
        }
        Block::Plain { content } => {
            out.push_str("<p>");
            push_inline(out, content);
            out.push_str("</p>");
        }
    }
}

fn push_inline(out: &mut String, segments: &[InlineSegment]) {
    for segment in segments {
        match segment {
            InlineSegment::Text { value } => out.push_str(&encode_text(value)),
            InlineSegment::Bold { value } => {
                out.push_str("<strong>");
                out.push_str(&encode_text(value));
                out.push_str("</strong>");
            }
            InlineSegment::Link { url } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(url));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                out.push_str(&encode_text(url));
                out.push_str("</a>");
            }
        }
    }
}

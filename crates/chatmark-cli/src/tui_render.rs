//! Maps formatted blocks onto styled ratatui lines.

use chatmark_engine::render::plain::BULLET;
use chatmark_engine::{Block, FormattedMessage, InlineSegment};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn header() -> Style {
    bold().fg(Color::Yellow)
}

fn link() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

/// One line per block, in order.
pub fn message_lines(message: &FormattedMessage) -> Vec<Line<'static>> {
    message.blocks.iter().map(block_line).collect()
}

fn block_line(block: &Block) -> Line<'static> {
    match block {
        Block::Blank => Line::default(),
        Block::BoldBullet { label, rest } => {
            let mut spans = vec![
                Span::raw(format!("{BULLET} ")),
                Span::styled(label.clone(), bold()),
            ];
            if !rest.is_empty() {
                spans.push(Span::raw(" "));
                spans.extend(inline_spans(rest));
            }
            Line::from(spans)
        }
        Block::SimpleBullet { content } => {
            let mut spans = vec![Span::raw(format!("{BULLET} "))];
            spans.extend(inline_spans(content));
            Line::from(spans)
        }
        Block::Header { text } => Line::from(Span::styled(text.clone(), header())),
        Block::EmojiHeader {
            emoji,
            text,
            trailing,
        } => Line::from(vec![
            Span::raw(format!("{emoji} ")),
            Span::styled(text.clone(), header()),
            Span::raw(trailing.clone()),
        ]),
        Block::Plain { content } => Line::from(inline_spans(content)),
    }
}

fn inline_spans(segments: &[InlineSegment]) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| match segment {
            InlineSegment::Text { value } => Span::raw(value.clone()),
            InlineSegment::Bold { value } => Span::styled(value.clone(), bold()),
            InlineSegment::Link { url } => Span::styled(url.clone(), link()),
        })
        .collect()
}

use serde::Serialize;

use super::kinds::Bold;

/// One classified sub-span of a line's text.
///
/// Segments own their text; markers consumed by the parser (the `**` pair
/// around a bold run) are not stored but can be restored with [`surface`].
///
/// [`surface`]: InlineSegment::surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineSegment {
    /// Plain text outside any bold run or URL.
    Text { value: String },
    /// Content that was wrapped in a `**` pair.
    Bold { value: String },
    /// A bare `http://` or `https://` URL.
    Link { url: String },
}

impl InlineSegment {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Self::Bold {
            value: value.into(),
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self::Link { url: url.into() }
    }

    /// The visible text of the segment, without markers.
    pub fn value(&self) -> &str {
        match self {
            Self::Text { value } | Self::Bold { value } => value.as_str(),
            Self::Link { url } => url.as_str(),
        }
    }

    /// The literal form this segment had in the source line.
    pub fn surface(&self) -> String {
        match self {
            Self::Bold { value } => Bold::wrap(value),
            other => other.value().to_string(),
        }
    }
}

/// Concatenates the surface forms of `segments`, reproducing the parsed input.
pub fn surface(segments: &[InlineSegment]) -> String {
    segments.iter().map(InlineSegment::surface).collect()
}

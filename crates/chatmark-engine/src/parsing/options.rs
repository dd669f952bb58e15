use serde::{Deserialize, Serialize};

/// How far a bare URL extends past its last "real" character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPolicy {
    /// The URL runs to the next whitespace, trailing punctuation included.
    #[default]
    Greedy,
    /// Trailing sentence punctuation and unbalanced closing brackets are
    /// left out of the link and emitted as text.
    TrimTrailingPunctuation,
}

/// Knobs for a [`MessageFormatter`](super::MessageFormatter).
///
/// The defaults reproduce the stock behaviour; both fields can come from
/// the `[format]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub link_policy: LinkPolicy,
    /// Marker glyphs recognised in addition to the built-in set.
    pub extra_markers: Vec<String>,
}

/// Emoji-header marker with owned glyph set.
pub struct Marker;

impl Marker {
    /// Built-in markers: globes, paw prints, cross and check marks,
    /// location pin, butterfly and magnifying glasses.
    pub const GLYPHS: [&'static str; 11] = [
        "🌍", "🌎", "🌏", "🐾", "❌", "✅", "✔", "📍", "🦋", "🔍", "🔎",
    ];

    /// U+FE0F VARIATION SELECTOR-16, which often trails a pictograph.
    pub const PRESENTATION_SELECTOR: char = '\u{FE0F}';

    /// Matches a marker glyph at the start of `line`.
    ///
    /// `extra` extends the built-in set. When several glyphs match the
    /// longest wins. A directly following presentation selector is part of
    /// the marker.
    ///
    /// # Returns
    /// Byte length of the marker, selector included.
    pub fn match_prefix(line: &str, extra: &[String]) -> Option<usize> {
        let glyph = Self::GLYPHS
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str))
            .filter(|glyph| !glyph.is_empty() && line.starts_with(*glyph))
            .max_by_key(|glyph| glyph.len())?;

        let mut len = glyph.len();
        if line[len..].starts_with(Self::PRESENTATION_SELECTOR) {
            len += Self::PRESENTATION_SELECTOR.len_utf8();
        }
        Some(len)
    }
}

/// List-item bullet with owned glyph set.
pub struct Bullet;

impl Bullet {
    /// The ASCII hyphen and U+2022 BULLET, accepted interchangeably.
    pub const GLYPHS: [char; 2] = ['-', '•'];

    /// Strips a leading bullet glyph, returning the text after it.
    ///
    /// Nothing after the glyph is consumed; rules decide how much
    /// whitespace they require.
    pub fn strip_glyph(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let first = chars.next()?;
        Self::GLYPHS.contains(&first).then_some(chars.as_str())
    }
}

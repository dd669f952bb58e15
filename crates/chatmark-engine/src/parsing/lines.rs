/// A single `\n`-delimited line of a message.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// The line with surrounding whitespace (including a `\r`) trimmed.
    /// Classification only ever looks at this.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// Always yields `text.split('\n').count()` items: an empty input is one
/// empty line and a trailing newline produces a final empty line.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, raw)| LineRef {
        index,
        text: raw.trim(),
    })
}

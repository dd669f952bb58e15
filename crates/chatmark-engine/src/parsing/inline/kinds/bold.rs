/// Bold run type with owned delimiter constant.
///
/// A bold run is `**inner**` where `inner` is non-empty and never contains
/// the delimiter itself. The block classifier reuses this for labels and
/// headers, so both layers agree on what a bold run is.
pub struct Bold;

impl Bold {
    /// The opening and closing delimiter.
    pub const DELIM: &'static str = "**";

    /// Matches a bold run at the very start of `s`.
    ///
    /// The run closes at the first `**` after the opener, so two runs on one
    /// line stay two runs.
    ///
    /// # Returns
    /// - `inner`: the text between the delimiters
    /// - `len`: byte length of the whole run including both delimiters
    pub fn match_prefix(s: &str) -> Option<(&str, usize)> {
        let rest = s.strip_prefix(Self::DELIM)?;
        let close = rest.find(Self::DELIM)?;
        if close == 0 {
            return None;
        }
        Some((&rest[..close], close + 2 * Self::DELIM.len()))
    }

    /// Wraps `inner` back into its surface form.
    pub fn wrap(inner: &str) -> String {
        format!("{}{inner}{}", Self::DELIM, Self::DELIM)
    }
}

use crate::parsing::options::LinkPolicy;

/// Bare URL type with owned scheme constants.
pub struct Url;

impl Url {
    /// Recognised schemes. `https://` is listed first only for readability;
    /// the two never match the same input.
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];

    /// Punctuation that `LinkPolicy::TrimTrailingPunctuation` strips from the end.
    pub const TRAILING_PUNCTUATION: [char; 8] = ['.', ',', ';', ':', '!', '?', '\'', '"'];

    /// Closing brackets stripped only when they have no opener inside the URL.
    pub const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

    /// Matches a bare URL at the very start of `s`, returning its byte length.
    ///
    /// The URL runs up to (not including) the first whitespace character.
    /// A scheme with nothing after it is not a URL.
    pub fn match_prefix(s: &str, policy: LinkPolicy) -> Option<usize> {
        let scheme = Self::SCHEMES.iter().find(|scheme| s.starts_with(*scheme))?;
        let body = &s[scheme.len()..];
        let body_len = body.find(char::is_whitespace).unwrap_or(body.len());

        let body_len = match policy {
            LinkPolicy::Greedy => body_len,
            LinkPolicy::TrimTrailingPunctuation => Self::trimmed_len(&body[..body_len]),
        };

        (body_len > 0).then_some(scheme.len() + body_len)
    }

    /// Length of `body` once trailing punctuation and unbalanced closing
    /// brackets are removed.
    ///
    /// Bracket counts are taken once up front and adjusted as characters
    /// are stripped, so the cost stays linear in the URL length.
    fn trimmed_len(body: &str) -> usize {
        let mut balance = Self::BRACKETS.map(|(open, close)| {
            let opens = body.matches(open).count();
            let closes = body.matches(close).count();
            closes.saturating_sub(opens)
        });

        let mut kept = body;
        while let Some(last) = kept.chars().next_back() {
            let strip = if Self::TRAILING_PUNCTUATION.contains(&last) {
                true
            } else if let Some(i) = Self::BRACKETS.iter().position(|(_, close)| *close == last) {
                if balance[i] == 0 {
                    false
                } else {
                    balance[i] -= 1;
                    true
                }
            } else {
                false
            };

            if !strip {
                break;
            }
            kept = &kept[..kept.len() - last.len_utf8()];
        }
        kept.len()
    }
}

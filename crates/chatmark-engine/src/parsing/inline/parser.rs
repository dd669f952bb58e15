use log::trace;

use crate::parsing::options::LinkPolicy;

use super::{
    cursor::Cursor,
    kinds::{Bold, Url},
    types::InlineSegment,
};

/// Splits a line into [`InlineSegment`]s with the default [`LinkPolicy`].
pub fn format_inline(text: &str) -> Vec<InlineSegment> {
    format_inline_with(text, LinkPolicy::default())
}

/// Splits a line into [`InlineSegment`]s.
///
/// # Precedence
/// Scanning is left to right. At each position a bold run is tried first,
/// then a bare URL; whichever matches consumes its whole span before the
/// scan resumes, so candidates never overlap. A URL that starts inside a
/// bold run stays part of the bold text.
///
/// # Returns
/// Segments covering the entire input in order. Text between matches is
/// emitted as `InlineSegment::Text`; empty gaps produce no segment, so an
/// empty input yields an empty vector.
pub fn format_inline_with(text: &str, policy: LinkPolicy) -> Vec<InlineSegment> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text segment
    fn flush_text(out: &mut Vec<InlineSegment>, pending: &str) {
        if !pending.is_empty() {
            out.push(InlineSegment::text(pending));
        }
    }

    while !cur.eof() {
        if let Some((segment, len)) =
            try_parse_bold(&cur).or_else(|| try_parse_link(&cur, policy))
        {
            flush_text(&mut out, &text[text_start..cur.pos()]);
            trace!("inline {segment:?} at byte {}", cur.pos());
            out.push(segment);
            cur.bump_n(len);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &text[text_start..]);
    out
}

/// Attempts to parse a bold run at the current position.
///
/// Returns the segment and the number of bytes it spans. An opener with no
/// closer is left for the text scan, so stray asterisks stay literal.
fn try_parse_bold(cur: &Cursor<'_>) -> Option<(InlineSegment, usize)> {
    let (inner, len) = Bold::match_prefix(cur.rest())?;
    Some((InlineSegment::bold(inner), len))
}

/// Attempts to parse a bare URL at the current position.
fn try_parse_link(cur: &Cursor<'_>, policy: LinkPolicy) -> Option<(InlineSegment, usize)> {
    let rest = cur.rest();
    let len = Url::match_prefix(rest, policy)?;
    Some((InlineSegment::link(&rest[..len]), len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::surface;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(format_inline("").is_empty());
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(
            format_inline("hello world"),
            vec![InlineSegment::text("hello world")]
        );
    }

    #[test]
    fn parse_bold_then_text() {
        assert_eq!(
            format_inline("**Title** extra"),
            vec![InlineSegment::bold("Title"), InlineSegment::text(" extra")]
        );
    }

    #[test]
    fn url_between_text() {
        assert_eq!(
            format_inline("See https://example.com/x for info"),
            vec![
                InlineSegment::text("See "),
                InlineSegment::link("https://example.com/x"),
                InlineSegment::text(" for info"),
            ]
        );
    }

    #[test]
    fn two_bold_runs_stay_separate() {
        assert_eq!(
            format_inline("**A** and **B**"),
            vec![
                InlineSegment::bold("A"),
                InlineSegment::text(" and "),
                InlineSegment::bold("B"),
            ]
        );
    }

    #[test]
    fn unterminated_bold_becomes_text() {
        assert_eq!(
            format_inline("**unterminated bold"),
            vec![InlineSegment::text("**unterminated bold")]
        );
    }

    #[test]
    fn empty_run_is_not_bold() {
        assert_eq!(format_inline("****"), vec![InlineSegment::text("****")]);
        assert_eq!(
            format_inline("*****x**"),
            vec![InlineSegment::text("*"), InlineSegment::bold("*x")]
        );
    }

    #[test]
    fn stray_asterisks_stay_literal() {
        assert_eq!(
            format_inline("5 * 3 = 15 *approx*"),
            vec![InlineSegment::text("5 * 3 = 15 *approx*")]
        );
    }

    #[test]
    fn url_keeps_trailing_period_by_default() {
        assert_eq!(
            format_inline("Read https://example.com/fox."),
            vec![
                InlineSegment::text("Read "),
                InlineSegment::link("https://example.com/fox."),
            ]
        );
    }

    #[test]
    fn url_trailing_period_trimmed_when_asked() {
        assert_eq!(
            format_inline_with(
                "Read https://example.com/fox.",
                LinkPolicy::TrimTrailingPunctuation
            ),
            vec![
                InlineSegment::text("Read "),
                InlineSegment::link("https://example.com/fox"),
                InlineSegment::text("."),
            ]
        );
    }

    #[test]
    fn bold_wins_over_url_inside_it() {
        assert_eq!(
            format_inline("**https://example.com**"),
            vec![InlineSegment::bold("https://example.com")]
        );
    }

    #[test]
    fn url_swallows_adjacent_markers() {
        assert_eq!(
            format_inline("https://example.com/**a** b"),
            vec![
                InlineSegment::link("https://example.com/**a**"),
                InlineSegment::text(" b"),
            ]
        );
    }

    #[test]
    fn adjacent_segments_have_no_gap() {
        assert_eq!(
            format_inline("**a**https://x.y"),
            vec![InlineSegment::bold("a"), InlineSegment::link("https://x.y")]
        );
    }

    #[rstest]
    #[case("")]
    #[case("plain words only")]
    #[case("**bold** and https://example.com/path?q=1 end")]
    #[case("**unterminated")]
    #[case("****")]
    #[case("*****x**")]
    #[case("a ** b ** c")]
    #[case("🐾 **Café** at https://ex.am/ple, then **more**")]
    #[case("http:// https://")]
    #[case("   leading and trailing   ")]
    fn surface_reconstructs_input(#[case] input: &str) {
        assert_eq!(surface(&format_inline(input)), input);
        assert_eq!(
            surface(&format_inline_with(
                input,
                LinkPolicy::TrimTrailingPunctuation
            )),
            input
        );
    }
}

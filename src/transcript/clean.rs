//! Subtitle cleanup transform.
//!
//! Converts a raw VTT or SRT document into a plain-text transcript in a
//! single line-oriented pass: header and cue-timing lines are dropped,
//! inline markup is stripped, and immediately repeated caption lines are
//! collapsed to one occurrence. Auto-generated captions re-emit the
//! previous line in each overlapping cue, so that collapse is where most
//! of the size reduction comes from.

use once_cell::sync::Lazy;
use regex::Regex;

/// Cue timing line: `00:00:01.000 --> 00:00:04.000`, hours optional,
/// SRT comma milliseconds accepted, trailing cue settings ignored.
static CUE_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\d{1,2}:)?\d{2}:\d{2}[.,]\d{3}\s*-->\s*(?:\d{1,2}:)?\d{2}:\d{2}[.,]\d{3}")
        .expect("Invalid timing regex")
});

/// A bare timestamp opening a line, left behind by malformed cues.
static LEADING_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}[.,]\d{3}").expect("Invalid timestamp regex"));

/// Inline spans: `<c>`, `</c.colorE5E5E5>`, word timings like `<00:00:00.320>`.
static INLINE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Clean a raw subtitle document into a plain-text transcript.
///
/// Total over arbitrary input: lines that don't look like VTT/SRT
/// structure are kept as caption text, so a document with no timing
/// lines at all still gets markup stripping and duplicate collapsing.
pub fn clean_subtitles(raw: &str) -> String {
    let mut cleaned: Vec<String> = Vec::new();
    let mut last_norm = String::new();

    for line in raw.lines() {
        let line = line.trim();

        if line.is_empty()
            || is_header_line(line)
            || is_timing_line(line)
            || is_cue_counter(line)
        {
            continue;
        }

        let text = INLINE_TAG.replace_all(line, "");
        let text = text.trim();

        let norm = normalize_whitespace(text);
        if norm.is_empty() || norm == last_norm {
            continue;
        }

        cleaned.push(text.to_string());
        last_norm = norm;
    }

    cleaned.join("\n")
}

/// WebVTT signature, per-file metadata, and block keywords.
fn is_header_line(line: &str) -> bool {
    line.starts_with("WEBVTT")
        || line.starts_with("Kind:")
        || line.starts_with("Language:")
        || line.starts_with("NOTE")
        || line.starts_with("STYLE")
        || line.starts_with("REGION")
}

fn is_timing_line(line: &str) -> bool {
    line.contains("-->") || CUE_TIMING.is_match(line) || LEADING_TIMESTAMP.is_match(line)
}

/// SRT-style numeric cue counter.
fn is_cue_counter(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Whitespace-insensitive form used for duplicate comparison. The first
/// occurrence keeps its original text in the output.
fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTO_CAPTIONS: &str = "\
WEBVTT
Kind: captions
Language: en

00:00:00.320 --> 00:00:02.800 align:start position:0%
Hello<00:00:00.800><c> world</c>

00:00:02.800 --> 00:00:05.120 align:start position:0%
Hello world
<00:00:03.200><c>this</c><00:00:03.600><c> is</c><00:00:04.000><c> a</c><00:00:04.400><c> test</c>

00:00:05.120 --> 00:00:07.440 align:start position:0%
this is a test
";

    #[test]
    fn test_collapses_consecutive_duplicates() {
        let cleaned = clean_subtitles(AUTO_CAPTIONS);
        assert_eq!(cleaned, "Hello world\nthis is a test");
    }

    #[test]
    fn test_no_timing_artifacts_in_output() {
        let cleaned = clean_subtitles(AUTO_CAPTIONS);
        assert!(!cleaned.contains("-->"));
        assert!(!cleaned.contains("WEBVTT"));
        assert!(!cleaned.contains("align:"));
        assert!(!cleaned.contains('<'));
    }

    #[test]
    fn test_preserves_non_consecutive_repeats() {
        let input = "\
WEBVTT

00:00:00.000 --> 00:00:01.000
A

00:00:01.000 --> 00:00:02.000
B

00:00:02.000 --> 00:00:03.000
A
";
        assert_eq!(clean_subtitles(input), "A\nB\nA");
    }

    #[test]
    fn test_run_of_duplicates_collapses_to_one() {
        let input = "Hello world\nHello world\nHello world\nNext line";
        assert_eq!(clean_subtitles(input), "Hello world\nNext line");
    }

    #[test]
    fn test_whitespace_variants_are_duplicates() {
        let input = "Hello  world\n  Hello world \nNext";
        // First occurrence's text survives, interior spacing intact.
        assert_eq!(clean_subtitles(input), "Hello  world\nNext");
    }

    #[test]
    fn test_plain_text_input_still_deduped() {
        assert_eq!(
            clean_subtitles("Just some text\nJust some text\nOther"),
            "Just some text\nOther"
        );
    }

    #[test]
    fn test_srt_document() {
        let input = "\
1
00:00:01,000 --> 00:00:04,000
First line

2
00:00:04,000 --> 00:00:08,000
First line

3
00:00:08,000 --> 00:00:12,000
Second line
";
        assert_eq!(clean_subtitles(input), "First line\nSecond line");
    }

    #[test]
    fn test_strips_inline_word_timestamps() {
        let input = "so<00:00:01.320><c> today</c><00:00:01.880><c> we</c>";
        assert_eq!(clean_subtitles(input), "so today we");
    }

    #[test]
    fn test_note_and_style_blocks_dropped() {
        let input = "\
WEBVTT

NOTE This file was generated automatically

STYLE
Actual caption
";
        // The style body line that looks like text is kept; the block
        // keywords themselves are not.
        assert_eq!(clean_subtitles(input), "Actual caption");
    }

    #[test]
    fn test_idempotent_on_cleaned_output() {
        let once = clean_subtitles(AUTO_CAPTIONS);
        assert_eq!(clean_subtitles(&once), once);
    }

    #[test]
    fn test_no_adjacent_normalized_duplicates() {
        let cleaned = clean_subtitles(AUTO_CAPTIONS);
        let lines: Vec<String> = cleaned.lines().map(normalize_whitespace).collect();
        for pair in lines.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_subtitles(""), "");
        assert_eq!(clean_subtitles("\n\n\n"), "");
    }

    #[test]
    fn test_tag_only_lines_dropped() {
        let input = "<c></c>\nReal text";
        assert_eq!(clean_subtitles(input), "Real text");
    }
}

//! Generated text cleanup
//!
//! Language models wrap reports in chatter: an opening "Here is the report:",
//! page counters, markdown bold, image placeholders they cannot produce. The
//! passes below strip those artifacts in a fixed order before the text reaches
//! the length governor and the outline parser.

use std::sync::OnceLock;

use regex::Regex;

/// Normalize raw generated text
///
/// Passes, in order:
///
/// 1. Opening preamble anchored at the start and confined to one line:
///    everything up to and including "Here is the report:", "I can provide
///    ... report" or "I'll generate", plus the whitespace after it
/// 2. Standalone `Page N` lines
/// 3. `**` bold delimiters
/// 4. Runs of blank lines collapsed to a single blank line
/// 5. Lines describing an image placeholder ("... illustrates ... [IMAGE"),
///    then any remaining `[IMAGE: ...]` markers
pub fn normalize(raw: &str) -> String {
    static PREAMBLE_RES: OnceLock<[Regex; 3]> = OnceLock::new();
    static PAGE_LINE_RE: OnceLock<Regex> = OnceLock::new();
    static BLANK_RUN_RE: OnceLock<Regex> = OnceLock::new();
    static ILLUSTRATES_RE: OnceLock<Regex> = OnceLock::new();
    static IMAGE_MARKER_RE: OnceLock<Regex> = OnceLock::new();

    if raw.trim().is_empty() {
        return String::new();
    }

    let preambles = PREAMBLE_RES.get_or_init(|| {
        [
            Regex::new(r"(?i)^.*?here is the report:?\s*").unwrap(),
            Regex::new(r"(?i)^.*?I can provide.*?report\S*\s*").unwrap(),
            Regex::new(r"(?i)^.*?I'll generate\s*").unwrap(),
        ]
    });
    let page_line_re = PAGE_LINE_RE.get_or_init(|| Regex::new(r"(?m)^Page \d+[ \t\r]*$").unwrap());
    // Three or more line breaks, allowing whitespace-only lines in between
    let blank_run_re = BLANK_RUN_RE.get_or_init(|| Regex::new(r"\n(?:[ \t\r]*\n){2,}").unwrap());
    let illustrates_re =
        ILLUSTRATES_RE.get_or_init(|| Regex::new(r".*?illustrates.*?\[IMAGE.*").unwrap());
    let image_marker_re = IMAGE_MARKER_RE.get_or_init(|| Regex::new(r"\[IMAGE:.*?\]").unwrap());

    let mut text = raw.to_string();

    for re in preambles {
        text = re.replace(&text, "").into_owned();
    }

    text = page_line_re.replace_all(&text, "").into_owned();
    text = text.replace("**", "");
    text = blank_run_re.replace_all(&text, "\n\n").into_owned();

    // The fragment pattern needs the marker, so it runs first
    text = illustrates_re.replace_all(&text, "").into_owned();
    text = image_marker_re.replace_all(&text, "").into_owned();

    // Removed lines can leave new blank runs behind
    text = blank_run_re.replace_all(&text, "\n\n").into_owned();

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n\n "), "");
    }

    #[test]
    fn test_strips_here_is_the_report() {
        let raw = "Sure! Here is the report:\n## Introduction\nText";
        assert_eq!(normalize(raw), "## Introduction\nText");
    }

    #[test]
    fn test_strips_i_can_provide() {
        let raw = "I can provide a detailed report:\n\n## Introduction\nBody";
        assert_eq!(normalize(raw), "## Introduction\nBody");
    }

    #[test]
    fn test_i_can_provide_keeps_rest_of_line() {
        let raw = "I can provide a detailed reports on this topic.\n## Introduction\nBody";
        assert_eq!(normalize(raw), "on this topic.\n## Introduction\nBody");
    }

    #[test]
    fn test_strips_ill_generate() {
        let raw = "Okay, I'll generate\n## Introduction\nBody";
        assert_eq!(normalize(raw), "## Introduction\nBody");
    }

    #[test]
    fn test_ill_generate_keeps_rest_of_line() {
        let raw = "Okay, I'll generate the full document now.\n## Introduction\nBody";
        assert_eq!(
            normalize(raw),
            "the full document now.\n## Introduction\nBody"
        );
    }

    #[test]
    fn test_preamble_does_not_cross_lines() {
        let raw = "## Introduction\nLater we report what I can provide.";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_preamble_only_at_start() {
        let raw = "## Introduction\nThe author said: here is the report: done.";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_removes_page_lines() {
        let raw = "## Intro\nText one.\nPage 2\nText two.\nPage 12  \nEnd";
        let out = normalize(raw);
        assert!(!out.contains("Page 2"));
        assert!(!out.contains("Page 12"));
        assert!(out.contains("Text two."));
    }

    #[test]
    fn test_keeps_inline_page_mentions() {
        let raw = "See Page 4 of the survey.";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_removes_bold() {
        assert_eq!(normalize("A **bold** claim"), "A bold claim");
    }

    #[test]
    fn test_collapses_blank_runs() {
        let out = normalize("A\n\n\n\n\nB\n \n\t\nC");
        assert_eq!(out, "A\n\nB\n\nC");
    }

    #[test]
    fn test_removes_image_markers() {
        let out = normalize("Solar panels [IMAGE: panel photo] convert light.");
        assert_eq!(out, "Solar panels  convert light.");
    }

    #[test]
    fn test_removes_illustrating_fragment() {
        let raw = "Intro line.\nFigure 1 illustrates the grid [IMAGE: grid diagram] layout.\nNext line.";
        assert_eq!(normalize(raw), "Intro line.\n\nNext line.");
    }

    #[test]
    fn test_no_blank_run_after_line_removal() {
        let raw = "A\n\nPage 3\n\nB";
        let out = normalize(raw);
        assert!(!out.contains("\n\n\n"));
        assert_eq!(out, "A\n\nB");
    }
}

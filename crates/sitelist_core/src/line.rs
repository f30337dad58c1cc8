use std::sync::LazyLock;

use regex::Regex;

/// One input line together with its 1-based position in the list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

/// Candidate (name, url) pair extracted from one line, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPair {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(ParsedPair),
    /// Blank line or the list header marker; not worth a warning.
    Skip,
    Unparseable,
}

/// Header line found at the top of hand-maintained list files.
const HEADER_MARKER: &str = "定制源";

static COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[:：]\s*(https?://.+)$").unwrap());
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(https?://.+)$").unwrap());

/// One recognized line shape. Matchers are tried in a fixed order, so an
/// earlier strategy always wins over a later one.
pub trait LineMatcher: Send + Sync {
    fn try_match(&self, line: &str) -> Option<ParsedPair>;
}

/// `NAME:URL` or `NAME：URL` (full-width colon), optional whitespace after
/// the separator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColonSeparated;

impl LineMatcher for ColonSeparated {
    fn try_match(&self, line: &str) -> Option<ParsedPair> {
        capture_pair(&COLON_RE, line)
    }
}

/// `NAME URL`, separated by one or more whitespace characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSeparated;

impl LineMatcher for WhitespaceSeparated {
    fn try_match(&self, line: &str) -> Option<ParsedPair> {
        capture_pair(&WHITESPACE_RE, line)
    }
}

fn capture_pair(re: &Regex, line: &str) -> Option<ParsedPair> {
    re.captures(line).map(|caps| ParsedPair {
        name: caps[1].trim().to_string(),
        url: caps[2].trim().to_string(),
    })
}

/// Ordered list of matcher strategies; the colon form takes precedence over
/// the whitespace form, so a line carrying both separators parses by colon.
pub struct LineParser {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ColonSeparated),
            Box::new(WhitespaceSeparated),
        ])
    }
}

impl LineParser {
    pub fn new(matchers: Vec<Box<dyn LineMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn parse(&self, line: &RawLine) -> LineOutcome {
        let trimmed = line.text.trim();
        if trimmed.is_empty() || trimmed == HEADER_MARKER {
            return LineOutcome::Skip;
        }
        for matcher in &self.matchers {
            if let Some(pair) = matcher.try_match(trimmed) {
                return LineOutcome::Parsed(pair);
            }
        }
        LineOutcome::Unparseable
    }
}

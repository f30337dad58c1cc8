use crate::dedupe::{DedupeOutcome, SeenKeys};
use crate::line::{LineOutcome, LineParser, RawLine};
use crate::record::{build_record, Clock, SiteRecord};

/// Receiver for human-readable per-line diagnostics.
pub trait DiagnosticSink {
    /// An unparseable line; the run continues without it.
    fn warning(&mut self, message: &str);
    /// An informational notice, e.g. a skipped duplicate.
    fn notice(&mut self, message: &str);
}

/// Collects diagnostics in memory. Used by tests and summary reporting.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub warnings: Vec<String>,
    pub notices: Vec<String>,
}

impl DiagnosticSink for CollectingSink {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Per-run line counters. `skipped` covers blank lines and the header
/// marker only; rejected duplicates are counted separately.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub lines: usize,
    pub skipped: usize,
    pub unparseable: usize,
    pub duplicate_names: usize,
    pub duplicate_urls: usize,
}

/// Run the parse/dedup/build pipeline over `lines` in order.
///
/// Records come back numbered 1..N in acceptance order. The dedup state is
/// local to this call, so repeated runs never see each other's keys.
pub fn collect_sites(
    lines: &[RawLine],
    clock: &dyn Clock,
    diagnostics: &mut dyn DiagnosticSink,
) -> (Vec<SiteRecord>, ImportStats) {
    let parser = LineParser::default();
    let mut seen = SeenKeys::new();
    let mut sites: Vec<SiteRecord> = Vec::new();
    let mut stats = ImportStats::default();

    for line in lines {
        stats.lines += 1;
        match parser.parse(line) {
            LineOutcome::Skip => stats.skipped += 1,
            LineOutcome::Unparseable => {
                stats.unparseable += 1;
                diagnostics.warning(&format!(
                    "line {}: unrecognized format: {}",
                    line.number,
                    line.text.trim()
                ));
            }
            LineOutcome::Parsed(pair) => match seen.admit(&pair) {
                DedupeOutcome::DuplicateName => {
                    stats.duplicate_names += 1;
                    diagnostics.notice(&format!(
                        "line {}: skipping duplicate site name: {}",
                        line.number, pair.name
                    ));
                }
                DedupeOutcome::DuplicateUrl => {
                    stats.duplicate_urls += 1;
                    diagnostics.notice(&format!(
                        "line {}: skipping duplicate url: {}",
                        line.number, pair.url
                    ));
                }
                DedupeOutcome::Accepted => {
                    let id = sites.len() as u32 + 1;
                    sites.push(build_record(id, &pair, clock));
                }
            },
        }
    }

    (sites, stats)
}

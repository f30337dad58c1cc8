//! Sitelist core: pure line-parsing, dedup and document-merge pipeline.
mod dedupe;
mod line;
mod merge;
mod pipeline;
mod record;

pub use dedupe::{DedupeOutcome, SeenKeys};
pub use line::{
    ColonSeparated, LineMatcher, LineOutcome, LineParser, ParsedPair, RawLine,
    WhitespaceSeparated,
};
pub use merge::{merge_sites, MergeError};
pub use pipeline::{collect_sites, CollectingSink, DiagnosticSink, ImportStats};
pub use record::{build_record, derive_key, Clock, SiteRecord};

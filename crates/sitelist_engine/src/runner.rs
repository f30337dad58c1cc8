use std::path::{Path, PathBuf};

use thiserror::Error;

use import_logging::{import_info, import_warn};
use sitelist_core::{collect_sites, merge_sites, DiagnosticSink, ImportStats, MergeError};

use crate::clock::SystemClock;
use crate::source::{read_lines, SourceError};
use crate::store::{load_document, save_document, StoreError};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error("no valid site entries found in {0:?}")]
    EmptyList(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub site_count: usize,
    pub stats: ImportStats,
}

/// Forwards pipeline diagnostics to the logging facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warning(&mut self, message: &str) {
        import_warn!("{message}");
    }

    fn notice(&mut self, message: &str) {
        import_info!("{message}");
    }
}

/// Parse `list_path` and merge the accepted records into `document_path`.
///
/// The run aborts before touching the document when the list is unreadable
/// or yields no records. The document write itself goes through the atomic
/// store, so a failed run never leaves a partially updated file behind.
pub fn run_import(
    list_path: &Path,
    document_path: &Path,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<RunSummary, ImportError> {
    let clock = SystemClock;

    let lines = read_lines(list_path)?;
    let (sites, stats) = collect_sites(&lines, &clock, diagnostics);
    if sites.is_empty() {
        return Err(ImportError::EmptyList(list_path.to_path_buf()));
    }
    import_info!("parsed {} site entries from {:?}", sites.len(), list_path);

    let mut document = load_document(document_path)?;
    merge_sites(&mut document, &sites, &clock)?;
    save_document(document_path, &document)?;
    import_info!("updated {:?} with {} sites", document_path, sites.len());

    Ok(RunSummary {
        site_count: sites.len(),
        stats,
    })
}

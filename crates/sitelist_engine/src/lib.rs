//! Sitelist engine: filesystem collaborators and run orchestration.
mod clock;
mod runner;
mod source;
mod store;

pub use clock::SystemClock;
pub use runner::{run_import, ImportError, LogSink, RunSummary};
pub use source::{read_lines, SourceError};
pub use store::{load_document, save_document, StoreError};

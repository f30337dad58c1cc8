use serde_json::Value;
use thiserror::Error;

use crate::record::{Clock, SiteRecord};

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("target document is not a JSON object")]
    NotAnObject,
    #[error("failed to serialize site records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Replace the document's site list and refresh its summary metadata.
///
/// Exactly `sites`, `total` and `exportTime` are overwritten; every other
/// field of the document passes through verbatim. Nothing is mutated on
/// error, so a failed merge leaves the caller's document intact.
pub fn merge_sites(
    document: &mut Value,
    sites: &[SiteRecord],
    clock: &dyn Clock,
) -> Result<(), MergeError> {
    let fields = document.as_object_mut().ok_or(MergeError::NotAnObject)?;
    let site_values = serde_json::to_value(sites)?;

    fields.insert("sites".to_string(), site_values);
    fields.insert("total".to_string(), Value::from(sites.len() as u64));
    fields.insert("exportTime".to_string(), Value::from(clock.export_time()));
    Ok(())
}

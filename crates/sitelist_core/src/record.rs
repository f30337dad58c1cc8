use serde::{Deserialize, Serialize};

use crate::line::ParsedPair;

/// Source of formatted timestamps, so the pipeline stays deterministic
/// under test.
///
/// Both formats carry a literal zone suffix with no conversion of the
/// underlying local time: the export format always tags records as UTC+8
/// and the document as `Z`, regardless of the host zone.
pub trait Clock: Send + Sync {
    /// Local wall-clock time at millisecond precision, `+08:00` appended.
    fn record_time(&self) -> String;
    /// Local wall-clock time in ISO-8601 form, `Z` appended.
    fn export_time(&self) -> String;
}

const KEY_MAX_CHARS: usize = 10;
/// Stripped from keys in this order, after space removal.
const KEY_STRIP: [&str; 3] = ["资源", "网", "采集"];

/// One imported service endpoint, serialized with the exact field names the
/// export document uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: u32,
    pub key: String,
    pub name: String,
    pub api: String,
    #[serde(rename = "type")]
    pub site_type: u32,
    #[serde(rename = "isActive")]
    pub is_active: u32,
    pub time: String,
    #[serde(rename = "isDefault")]
    pub is_default: u32,
    pub remark: String,
    pub tags: Vec<String>,
    pub priority: u32,
}

/// Derive the short slug for a site name: lowercase, drop spaces, drop the
/// filler substrings, keep at most 10 characters.
///
/// The derivation is lossy; an empty result or a collision between distinct
/// names is accepted, keys are not deduplicated.
pub fn derive_key(name: &str) -> String {
    let mut key = name.to_lowercase().replace(' ', "");
    for filler in KEY_STRIP {
        key = key.replace(filler, "");
    }
    key.chars().take(KEY_MAX_CHARS).collect()
}

/// Build the record for an accepted pair. `id` is the 1-based position among
/// all accepted records, in acceptance order.
pub fn build_record(id: u32, pair: &ParsedPair, clock: &dyn Clock) -> SiteRecord {
    SiteRecord {
        id,
        key: derive_key(&pair.name),
        name: pair.name.clone(),
        api: pair.url.clone(),
        site_type: 2,
        is_active: 1,
        time: clock.record_time(),
        is_default: 0,
        remark: String::new(),
        tags: Vec::new(),
        priority: 0,
    }
}

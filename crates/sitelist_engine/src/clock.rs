use chrono::Local;

use sitelist_core::Clock;

/// Wall-clock backed [`Clock`].
///
/// Both formats render local naive time and append a literal zone suffix.
/// The legacy export format always tags records as `+08:00` and the document
/// as `Z` regardless of the host zone, so no conversion is performed here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn record_time(&self) -> String {
        format!("{}+08:00", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }

    fn export_time(&self) -> String {
        format!("{}Z", Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}

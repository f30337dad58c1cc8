use std::collections::HashSet;

use crate::line::ParsedPair;

/// The two dedup keys accumulated over one run. Constructed per run and
/// threaded through the pipeline, never stored globally.
#[derive(Debug, Default)]
pub struct SeenKeys {
    names: HashSet<String>,
    urls: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupeOutcome {
    Accepted,
    DuplicateName,
    DuplicateUrl,
}

impl SeenKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `pair` is new, recording its keys when it is.
    ///
    /// The name is checked before the url, so a pair colliding on both is
    /// always reported as a duplicate name.
    pub fn admit(&mut self, pair: &ParsedPair) -> DedupeOutcome {
        if self.names.contains(&pair.name) {
            return DedupeOutcome::DuplicateName;
        }
        if self.urls.contains(&pair.url) {
            return DedupeOutcome::DuplicateUrl;
        }
        self.names.insert(pair.name.clone());
        self.urls.insert(pair.url.clone());
        DedupeOutcome::Accepted
    }
}

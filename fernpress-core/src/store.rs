//! Cached access to the scanned content set.

use crate::models::ContentSet;
use crate::scanner::{ScanError, Scanner};
use parking_lot::Mutex;
use std::sync::Arc;

/// Owns the scanner and memoizes its result
///
/// Two states: cold (no cached scan) and warm (cached scan present). The
/// driver constructs the store with an explicit `dev_mode` flag; in dev
/// mode every read rescans so live edits show up, and nothing is ever
/// cached. The lock is held across the scan, so concurrent first reads
/// trigger exactly one walk.
pub struct ContentStore {
    scanner: Scanner,
    dev_mode: bool,
    cache: Mutex<Option<Arc<ContentSet>>>,
}

impl ContentStore {
    pub fn new(scanner: Scanner, dev_mode: bool) -> Self {
        Self {
            scanner,
            dev_mode,
            cache: Mutex::new(None),
        }
    }

    /// Get the content set, scanning if necessary
    pub fn get(&self) -> Result<Arc<ContentSet>, ScanError> {
        if self.dev_mode {
            return Ok(Arc::new(ContentSet::new(self.scanner.scan()?)));
        }

        let mut cache = self.cache.lock();
        if let Some(set) = cache.as_ref() {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(ContentSet::new(self.scanner.scan()?));
        *cache = Some(Arc::clone(&set));
        Ok(set)
    }

    /// Drop the cached scan; the next read walks the tree again
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}

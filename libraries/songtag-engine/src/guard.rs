use songtag_core::{Result, SongTagError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Marks one operation kind as running until dropped.
///
/// Acquiring while another guard for the same flag is alive fails with
/// [`SongTagError::Busy`] instead of waiting.
#[derive(Debug)]
pub(crate) struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    pub(crate) fn acquire(flag: &Arc<AtomicBool>, operation: &str) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SongTagError::busy(operation))?;

        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

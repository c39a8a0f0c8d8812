//! Session shared between callers

use crate::{BatchSummary, ReportSession, SessionError};
use std::path::Path;
use std::sync::{Arc, Mutex, TryLockError};
use tracing::debug;

/// Reference-counted session that rejects overlapping requests
///
/// A request arriving while another one holds the session fails with
/// [`SessionError::Busy`] instead of waiting.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<ReportSession>>,
}

impl SharedSession {
    /// Wrap a session
    pub fn new(session: ReportSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access, or fail with `Busy`
    pub fn try_with<T, F>(&self, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut ReportSession) -> Result<T, SessionError>,
    {
        let mut guard = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                debug!("Session busy, rejecting request");
                return Err(SessionError::Busy);
            }
            // a panicked request leaves at most one whole batch in place
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Process a file unless another request is in flight
    pub fn try_process_file(&self, path: Option<&Path>) -> Result<BatchSummary, SessionError> {
        self.try_with(|session| session.process_file(path).map(|batch| batch.summary()))
    }
}

//! Cooperative cancellation for sort strategies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::FracError;

/// Cooperative cancellation token shared between a run and its strategies.
///
/// Clones share the same flag, so cancelling any clone cancels them all.
///
/// # Example
/// ```
/// use fracsort_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint for sort loops: `Err(FracError::Cancelled)` once cancelled.
    pub fn check_cancelled(&self) -> Result<(), FracError> {
        if self.is_cancelled() {
            Err(FracError::Cancelled)
        } else {
            Ok(())
        }
    }
}

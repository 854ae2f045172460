//! Cooperative cancellation of batch runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

/// A flag the host sets to stop a batch early. Clones share the flag, so
/// one clone can be handed to another thread and cancelled from there.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    pub(crate) fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// The batch was cancelled; its partial results were discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("batch cancelled before it finished")]
pub struct Cancelled;

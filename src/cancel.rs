//! Cooperative cancellation flag polled by every runner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag. Set it to `true` from any thread; the running search
/// stops at its next generation, pass, or iteration boundary.
pub type CancelFlag = Arc<AtomicBool>;

pub(crate) fn is_cancelled(cancel: Option<&CancelFlag>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

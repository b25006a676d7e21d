//! Process-wide Ctrl+C flag.
//!
//! SIGINT must never kill the hub: while a game runs the terminal sends it to
//! both processes, and the hub only needs to know it happened.

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static HANDLER: OnceCell<()> = OnceCell::new();

/// Install the SIGINT handler. Safe to call more than once.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    HANDLER
        .get_or_try_init(|| ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)))
        .map(|_| ())
}

/// Record an interrupt. Used by the signal handler and tests.
pub fn raise() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Clear the flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Return whether an interrupt arrived since the last call, clearing it.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Serialises unit tests that raise or consume the process-wide flag.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

//! Scoped suppression of the process-wide diagnostic logger.

use log::LevelFilter;
use std::sync::{Mutex, MutexGuard};

/// Number of live guards and the level to restore when the last one drops.
static QUIET_STATE: Mutex<(usize, LevelFilter)> = Mutex::new((0, LevelFilter::Off));

fn lock_state() -> MutexGuard<'static, (usize, LevelFilter)> {
    // A poisoned lock still holds a consistent counter.
    QUIET_STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Silences every `log` record while alive.
///
/// The first guard captures the current `log::max_level()` and sets it to
/// `Off`; the last guard to drop puts the captured level back. Guards may
/// nest and may be dropped in any order.
#[must_use = "logging is only suppressed while the guard is alive"]
pub struct QuietLogs {
    _private: (),
}

impl QuietLogs {
    pub fn new() -> Self {
        let mut state = lock_state();
        if state.0 == 0 {
            state.1 = log::max_level();
            log::set_max_level(LevelFilter::Off);
        }
        state.0 += 1;
        QuietLogs { _private: () }
    }

    /// Whether any guard is currently alive in this process
    pub fn is_active() -> bool {
        lock_state().0 > 0
    }
}

impl Default for QuietLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        let mut state = lock_state();
        state.0 = state.0.saturating_sub(1);
        if state.0 == 0 {
            log::set_max_level(state.1);
        }
    }
}

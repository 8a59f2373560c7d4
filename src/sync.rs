//! Mutex helpers with poison recovery.
//!
//! The crate holds two pieces of shared state: the cell-width cache in
//! [`crate::cells`] and the output sink of [`crate::logging::RenderLogger`].
//! Neither can be left logically inconsistent by a panicking writer (a stale
//! cache entry is recomputed, a half-written log line is still a log line), so
//! a poisoned lock is recovered instead of propagated.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Library code | [`lock_recover`] |
//! | Library code, tracking down a poison source | [`lock_recover_debug`] |
//! | Tests | `.lock().unwrap()` |

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the guard if a previous holder panicked.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use query_render::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Same as [`lock_recover`], but reports the recovery on stderr in debug builds.
///
/// `context` names the call site (e.g. `"cells::cell_len"`).
#[inline]
pub fn lock_recover_debug<'a, T: ?Sized>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        eprintln!("[query_render::sync] mutex poison recovered at: {context}");
        #[cfg(not(debug_assertions))]
        let _ = context;
        e.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn poisoned(value: i32) -> Arc<Mutex<i32>> {
        let mutex = Arc::new(Mutex::new(value));
        let clone = Arc::clone(&mutex);
        let _ = thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the mutex");
        })
        .join();
        assert!(mutex.is_poisoned());
        mutex
    }

    #[test]
    fn test_lock_recover_normal() {
        let mutex = Mutex::new(7);
        assert_eq!(*lock_recover(&mutex), 7);
    }

    #[test]
    fn test_lock_recover_poisoned() {
        let mutex = poisoned(42);
        let mut guard = lock_recover(&mutex);
        *guard += 1;
        assert_eq!(*guard, 43);
    }

    #[test]
    fn test_lock_recover_debug_poisoned() {
        let mutex = poisoned(5);
        assert_eq!(*lock_recover_debug(&mutex, "test"), 5);
    }
}

//! The `once` contract upheld across threads.
//! Calls go through `&self`, so the wrapper can be shared freely;
//! an atomic swap picks the single winning caller.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// Wraps a callable so it is invoked at most once,
/// no matter how calls from different threads interleave.
/// Exactly one caller observes `Some`; every other call,
/// concurrent with or after the winning one, yields `None` immediately.
/// Losing callers do not block waiting for the winner to finish.
#[derive(Debug)]
pub struct Once<F> {
    fired: AtomicBool,
    slot: Mutex<Option<F>>,
}

impl<F> Once<F> {
    /// Constructs a new `Once` by wrapping a callable, arming it.
    pub fn wrap(f: F) -> Once<F> {
        Once {
            fired: AtomicBool::new(false),
            slot: Mutex::new(Some(f)),
        }
    }

    /// Whether the single invocation has been spent.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Takes the callable out without invoking it,
    /// leaving the wrapper fired.
    /// At most one caller ever gets `Some` out of this,
    /// whether through `disarm` or through an invocation.
    pub fn disarm(&self) -> Option<F> {
        if self.fired.swap(true, Ordering::AcqRel) {
            return None;
        }
        // Only the thread that flipped the flag reaches the slot.
        // The lock is never held across user code, so a poisoned
        // slot can only come from a foreign panic; absorb it.
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.take()
    }

    /// Invokes a zero-argument callable.
    /// The callable leaves the wrapper *before* it runs,
    /// so a panicking first call still spends the invocation.
    pub fn call<R>(&self) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        self.disarm().map(|f| f())
    }

    /// Invokes a one-argument callable.
    pub fn call_with<A, R>(&self, arg: A) -> Option<R>
    where
        F: FnOnce(A) -> R,
    {
        self.disarm().map(|f| f(arg))
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn single_thread_contract_holds() {
        let wrapped = Once::wrap(|v: i32| v + 1);
        assert!(!wrapped.has_fired());
        assert_eq!(wrapped.call_with(1), Some(2));
        assert_eq!(wrapped.call_with(1), None);
        assert!(wrapped.has_fired());
    }

    #[test]
    fn hammered_from_many_threads() {
        let runs = AtomicUsize::new(0);
        let wrapped = Once::wrap(|| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    wrapped.call();
                });
            }
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(wrapped.has_fired());
    }

    #[test]
    fn exactly_one_caller_sees_the_result() {
        let winners = AtomicUsize::new(0);
        let wrapped = Once::wrap(|| "only you");
        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    if wrapped.call().is_some() {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });
        assert_eq!(winners.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disarm_counts_as_the_invocation() {
        let wrapped = Once::wrap(|| ());
        assert!(wrapped.disarm().is_some());
        assert!(wrapped.has_fired());
        assert_eq!(wrapped.call(), None);
    }
}

use std::mem;

/// State of a wrapper.
/// Holding the callable *is* the "not yet called" state,
/// so the flag and the callable can never disagree.
#[derive(Debug)]
enum State<F> {
    Armed(F),
    Fired,
}

/// Wraps a callable so it is invoked at most once.
/// The first invocation runs the callable and yields its result;
/// every later invocation is a no-op that yields `None`.
#[derive(Debug)]
pub struct Once<F> {
    state: State<F>,
}

impl<F> Once<F> {
    /// Constructs a new `Once` by wrapping a callable, arming it.
    pub fn wrap(f: F) -> Once<F> {
        Once { state: State::Armed(f) }
    }

    /// Whether the single invocation has been spent.
    /// `true` is terminal; no sequence of calls makes this `false` again.
    pub fn has_fired(&self) -> bool {
        matches!(self.state, State::Fired)
    }

    /// Takes the callable back out without invoking it,
    /// leaving the wrapper fired.
    /// Yields `None` if the invocation was already spent.
    pub fn disarm(&mut self) -> Option<F> {
        match mem::replace(&mut self.state, State::Fired) {
            State::Armed(f) => Some(f),
            State::Fired => None,
        }
    }

    /// Invokes a zero-argument callable.
    /// The callable is moved out of the wrapper *before* it runs,
    /// so a panicking first call still spends the invocation.
    pub fn call<R>(&mut self) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        self.disarm().map(|f| f())
    }

    /// Invokes a one-argument callable.
    /// After the first call the argument is ignored entirely,
    /// it is dropped without the callable ever seeing it.
    pub fn call_with<A, R>(&mut self, arg: A) -> Option<R>
    where
        F: FnOnce(A) -> R,
    {
        self.disarm().map(|f| f(arg))
    }
}

/// Wraps `f` so that only the first invocation runs it.
/// Shorthand for `Once::wrap`.
pub fn once<F>(f: F) -> Once<F> {
    Once::wrap(f)
}

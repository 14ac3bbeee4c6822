//! Partial invocation: pre-bind arguments now, call later.
//! Each combinator returns a new callable with deferred access
//! to the values moved into it; nothing runs until that callable
//! is invoked.

/// Pre-binds the argument of `f`, producing a one-shot thunk.
/// Consumes `f` and `arg`; the thunk performs `f(arg)` when invoked.
pub fn defer<F, A, R>(f: F, arg: A) -> impl FnOnce() -> R
where
    F: FnOnce(A) -> R,
{
    move || f(arg)
}

/// Pre-binds the argument of `f`, producing a reusable thunk.
/// Every invocation performs `f(arg)` on a fresh clone of `arg`.
pub fn bind<F, A, R>(f: F, arg: A) -> impl Fn() -> R
where
    F: Fn(A) -> R,
    A: Clone,
{
    move || f(arg.clone())
}

/// Pre-binds the first of two arguments, deferring the second.
/// `curry(add, 2)` is the reusable "add two" function;
/// `curry(add, 6)(7)` skips the intermediate binding entirely.
pub fn curry<F, A, B, R>(f: F, first: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |second| f(first.clone(), second)
}

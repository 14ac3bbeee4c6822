//! # Oncewrap
//! This crate contains small combinators for controlling when,
//! and how many times, a callable is allowed to run.
//!
//! - `once` wraps a callable so that only the first invocation
//!   actually runs it; every later invocation is a no-op that
//!   returns `None`.
//! - `sync` upholds the same at-most-once contract when the wrapper
//!   is shared between threads.
//! - `partial` pre-binds arguments, deferring the call itself.
//!
//! ## Using Oncewrap
//! Add oncewrap to your `Cargo.toml`:
//! ```toml
//! oncewrap = "0.1"
//! ```
//! Then simply:
//! ```
//! use oncewrap::once;
//!
//! let mut greet = once(|| "hi, emily!");
//!
//! assert_eq!(greet.call(), Some("hi, emily!"));
//! assert_eq!(greet.call(), None);
//! assert_eq!(greet.call(), None);
//! ```

pub mod once;
pub mod partial;
pub mod sync;

pub use crate::once::{once, Once};

//! # I/O-Raising Function
//!
//! [`RaisingFunction`] is a function of arity one whose invocation may fail
//! with an [`io::Error`]. Any `Fn(T) -> io::Result<R>` already implements it.

use std::io;
use std::panic;

use crate::errors::UncheckedIoError;

/// Function of arity one which may raise an I/O error.
///
/// - `T`: argument type
/// - `R`: return type
///
/// Implementors only provide [`apply`](Self::apply). The trait holds no
/// state of its own, so it is `Send`/`Sync` whenever the implementor is.
pub trait RaisingFunction<T, R> {
    /// Apply the function.
    ///
    /// Errors are returned exactly as the underlying operation produced them.
    fn apply(&self, t: T) -> io::Result<R>;

    /// Apply the function, raising any I/O error as a panic.
    ///
    /// On success the result is returned unchanged. On failure this panics
    /// with an [`UncheckedIoError`] payload that owns the original error.
    /// Use [`extract_io_errors`](crate::extract_io_errors) to get it back.
    #[track_caller]
    fn unchecked(&self, t: T) -> R {
        match self.apply(t) {
            Ok(result) => result,
            Err(err) => raise(err),
        }
    }
}

impl<T, R, F> RaisingFunction<T, R> for F
where
    F: Fn(T) -> io::Result<R>,
{
    fn apply(&self, t: T) -> io::Result<R> {
        self(t)
    }
}

/// Panic with `err` wrapped as an [`UncheckedIoError`].
#[track_caller]
pub(crate) fn raise(err: io::Error) -> ! {
    panic::panic_any(UncheckedIoError::new(err))
}

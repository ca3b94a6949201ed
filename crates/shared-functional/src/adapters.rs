//! # Checked/Unchecked Boundary Adapters
//!
//! Helpers for crossing between `io::Result` code and closure-only APIs.
//!
//! | Direction | Helper |
//! |-----------|--------|
//! | checked → unchecked | [`unchecked_fn`], [`uncheck_io_errors`] |
//! | unchecked → checked | [`extract_io_errors`] |
//! | checked → wrapped `Result` | [`try_unchecked`] |

use std::io;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::errors::UncheckedIoError;
use crate::function::{raise, RaisingFunction};

/// Convert a [`RaisingFunction`] into a plain closure.
///
/// The closure applies [`RaisingFunction::unchecked`], so it can be handed
/// to `Iterator::map` and similar APIs.
pub fn unchecked_fn<T, R, F>(function: F) -> impl Fn(T) -> R
where
    F: RaisingFunction<T, R>,
{
    move |t| function.unchecked(t)
}

/// Evaluate an I/O-raising block, raising any error as an unchecked panic.
#[track_caller]
pub fn uncheck_io_errors<R, F>(call: F) -> R
where
    F: FnOnce() -> io::Result<R>,
{
    match call() {
        Ok(result) => result,
        Err(err) => raise(err),
    }
}

/// Apply `function` and wrap any error without panicking.
pub fn try_unchecked<T, R, F>(function: &F, t: T) -> Result<R, UncheckedIoError>
where
    F: RaisingFunction<T, R> + ?Sized,
{
    function.apply(t).map_err(UncheckedIoError::new)
}

/// Evaluate `call`, turning an unchecked I/O panic back into its cause.
///
/// A panic carrying an [`UncheckedIoError`] becomes `Err` with the original
/// error. Any other panic is resumed unchanged. State shared with `call`
/// must tolerate being observed after an I/O failure.
pub fn extract_io_errors<R, F>(call: F) -> io::Result<R>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => Ok(result),
        Err(payload) => match payload.downcast::<UncheckedIoError>() {
            Ok(unchecked) => {
                debug!(
                    kind = ?unchecked.kind(),
                    error = %unchecked.cause(),
                    "Extracted I/O error from unchecked panic"
                );
                Err(unchecked.into_cause())
            }
            Err(other) => {
                trace!("Resuming panic without I/O error payload");
                panic::resume_unwind(other)
            }
        },
    }
}

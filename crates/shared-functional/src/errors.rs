//! Unchecked I/O error type.

use std::io;
use thiserror::Error;

/// An [`io::Error`] raised through a path that cannot return it.
///
/// This is the panic payload produced by
/// [`RaisingFunction::unchecked`](crate::RaisingFunction::unchecked). It owns
/// the original error, which stays reachable through `source()`.
#[derive(Debug, Error)]
#[error("unchecked I/O error: {cause}")]
pub struct UncheckedIoError {
    #[source]
    cause: io::Error,
}

impl UncheckedIoError {
    /// Wrap a checked I/O error.
    ///
    /// If `error` already carries an `UncheckedIoError` (see
    /// [`into_io_error`](Self::into_io_error)), that wrapper is returned
    /// instead, so the result is never more than one layer deep.
    pub fn new(error: io::Error) -> Self {
        if !error.get_ref().is_some_and(|inner| inner.is::<Self>()) {
            return Self { cause: error };
        }

        let kind = error.kind();
        match error.into_inner().map(|inner| inner.downcast::<Self>()) {
            Some(Ok(wrapped)) => *wrapped,
            Some(Err(other)) => Self {
                cause: io::Error::new(kind, other),
            },
            None => Self {
                cause: io::Error::from(kind),
            },
        }
    }

    /// The original I/O error.
    pub fn cause(&self) -> &io::Error {
        &self.cause
    }

    /// Kind of the original I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.cause.kind()
    }

    /// Unwrap into the original I/O error.
    pub fn into_cause(self) -> io::Error {
        self.cause
    }

    /// Carry this wrapper back into a checked context.
    ///
    /// The returned error has the cause's kind; passing it to
    /// [`UncheckedIoError::new`] yields this wrapper again rather than a
    /// nested one.
    pub fn into_io_error(self) -> io::Error {
        io::Error::new(self.kind(), self)
    }
}

impl From<UncheckedIoError> for io::Error {
    fn from(err: UncheckedIoError) -> Self {
        err.into_io_error()
    }
}

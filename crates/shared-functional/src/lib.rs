//! # Shared Functional Crate
//!
//! Functions of arity one that may fail with an [`std::io::Error`], and the
//! adapters that move such failures across APIs which only accept plain
//! closures.
//!
//! ## Components
//!
//! | Module | Item | Use Case |
//! |--------|------|----------|
//! | `function` | [`RaisingFunction`] | `apply` (checked) and `unchecked` (panics) |
//! | `errors` | [`UncheckedIoError`] | Panic payload carrying the original I/O error |
//! | `adapters` | [`unchecked_fn`], [`extract_io_errors`], ... | Crossing the boundary in both directions |
//!
//! ## Error Model
//!
//! - **Checked**: `apply` returns `io::Result<R>`; errors propagate verbatim.
//! - **Unchecked**: `unchecked` panics with an [`UncheckedIoError`] payload
//!   whose `source()` is the original error, moved, never copied.
//! - **Single layer**: the translation never stacks a second wrapper.
//!
//! ## Usage
//!
//! ```rust
//! use shared_functional::{unchecked_fn, RaisingFunction};
//! use std::io;
//!
//! let parse = |s: &str| -> io::Result<u32> {
//!     s.parse()
//!         .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
//! };
//!
//! assert_eq!(parse.apply("7")?, 7);
//!
//! let total: u32 = ["1", "2", "3"].into_iter().map(unchecked_fn(parse)).sum();
//! assert_eq!(total, 6);
//! # Ok::<(), io::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod errors;
pub mod function;

// Re-exports
pub use adapters::{extract_io_errors, try_unchecked, uncheck_io_errors, unchecked_fn};
pub use errors::UncheckedIoError;
pub use function::RaisingFunction;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

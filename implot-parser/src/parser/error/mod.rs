//! Errors that can occur while tokenizing or parsing an expression.
//!
//! Every kind of error is a separate struct in [`kind`] that derives
//! [`ErrorKind`](implot_error::ErrorKind), so that it can be reported with `ariadne`.

pub mod kind;

pub use implot_error::Error;

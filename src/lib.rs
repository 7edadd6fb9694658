//! Single-use HTTP response builder.
//!
//! A [`ResponseBuilder`] collects a status and headers, then delivers exactly
//! one [`Outcome`] (a [`Reply`] or an [`HttpError`]) to a callback or to the
//! paired [`Completion`] future. Writing the outcome to the wire is left to
//! the transport.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
mod helpers;

pub mod errors;
mod grammar;
pub mod headers;
pub mod response;
pub mod status;

pub use response::*;

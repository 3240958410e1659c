//! Browser utilities.
//!
//! - [`dom`] - Element focus helpers
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
pub mod logger;

//! Public API boundary types.
//!
//! Checker errors are converted to these at the boundary so that a
//! diagnostics stage (renderer, language server) never depends on checker
//! internals.

pub mod error;

pub use error::{Diagnostic, RelatedInfo};

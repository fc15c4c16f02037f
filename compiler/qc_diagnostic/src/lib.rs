//! Diagnostic system for QuakeC front-end errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and help footers (why, and how to fix)
//!
//! Phase crates (`qc_lexer`, `qc_parse`) keep their own typed errors and
//! convert into [`Diagnostic`] at the reporting boundary.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Footer, FooterKind, Label, LabelStyle, Severity};
pub use error_code::{ErrorCode, Phase};

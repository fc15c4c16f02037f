//! Grammar: the symbol registry and the parsing routines that interpret it.
//!
//! - `registry`: symbol definitions and the QuakeC table
//! - `expr`: the precedence-climbing expression engine
//! - `stmt`: statements and blocks
//! - `decl`: declarations and type specifiers

mod decl;
mod expr;
pub mod registry;
mod stmt;

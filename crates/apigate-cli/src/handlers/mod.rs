//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Take the platform port and parsed arguments
//! - Delegate decisions to apigate-core
//! - Format output for the terminal (or JSON)

pub mod check;
pub mod eval;
pub mod probe;

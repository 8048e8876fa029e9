//! Utility modules
//!
//! - [`console`]: line-oriented program output shared between threads
//! - [`logging`]: tracing subscriber setup for the binaries

pub mod console;
pub mod logging;

//! Support library for the `retia` binary.
//!
//! Exposes the command pipeline and logging set-up so integration tests can
//! drive commands without spawning a subprocess.

pub mod cli;
pub mod logging;

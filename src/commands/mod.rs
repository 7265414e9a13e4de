//! Command handler layer.
//!
//! Owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Match CLI inputs here; delegate work to `services/*`.
//! - Lookup failures are reported in-band and never fail the process;
//!   only an unreadable or empty `--file` input returns an error.

pub mod runtime;

pub use runtime::handle_lookup_commands;

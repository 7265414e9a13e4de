//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep record/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.
//! Changes here can affect `--json` outputs; keep them deliberate.

pub mod models;

//! Service layer containing the lookup logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — config file + env var resolution into `Settings`.
//! - `validate.rs` — IPv4 format validation.
//! - `lookup.rs` — upstream lookup client (one blocking POST per IP).
//! - `scrape.rs` — result-box extraction from the upstream HTML.
//! - `echo.rs` — public IP discovery with fallback endpoint.
//! - `report.rs` — batch summary assembly + text/JSON persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects are explicit and localized.
//! - Command handlers stay thin; delegate here.

pub mod config;
pub mod echo;
pub mod lookup;
pub mod output;
pub mod report;
pub mod scrape;
pub mod validate;

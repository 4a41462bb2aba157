//! # escala-core
//!
//! Error definitions and settings shared by every crate in the escala
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Settings (rotation period, timestamp offset).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, DEFAULT_ROTATION_PERIOD};

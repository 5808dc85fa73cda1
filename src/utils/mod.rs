//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Browser helpers (scroll lock surface, theme, smooth scrolling)
//! - [`asset_url`] - Base-path-aware asset URLs
//! - [`format`] - Labels for periods, counters and the footer

mod asset;
pub mod dom;
pub mod format;

pub use asset::{asset_url, resolve_asset};

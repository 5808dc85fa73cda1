//! Core viewer logic and page-independent services.
//!
//! - [`viewer`] - Media viewer state machine (gallery, zoom, fullscreen)
//! - [`display`] - Derived image geometry for the viewer
//! - [`scroll_lock`] - Counted, guard-scoped background scroll locking
//! - [`seo`] - schema.org structured data
//! - [`error`] - Error types

pub mod display;
pub mod error;
pub mod scroll_lock;
pub mod seo;
pub mod viewer;

pub use display::DisplayScale;
pub use error::{ContentError, ImageLoadFailure};
pub use scroll_lock::{ScrollLock, ScrollLocker, ScrollSurface};
pub use viewer::{MediaViewer, ViewerEvent, ViewerKey, ViewerOutcome, ViewerSession, ZoomLevel};

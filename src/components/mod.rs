//! UI components built with Leptos.
//!
//! - [`page`] - Single-page layout (main entry point)
//! - [`sections`] - Content sections (hero, skills, projects, ...)
//! - [`modal`] - Dialog frame plus project and résumé dialogs
//! - [`viewer`] - Media viewer overlay
//! - [`reveal`] - Reveal-on-scroll wrappers
//! - [`theme_toggle`] - Floating theme switch
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod modal;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod theme_toggle;
pub mod viewer;

pub use page::Page;

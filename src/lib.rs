//! Personal portfolio site rendered client-side with Leptos.
//!
//! The page is a single scrolling document built from bundled TOML content.
//! Project screenshots open in a media viewer overlay whose state machine
//! lives in [`core::viewer`].

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;

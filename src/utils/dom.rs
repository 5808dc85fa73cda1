//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Calls are best-effort:
//! a missing window or a rejected style write leaves the page as it was.

use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::core::ScrollSurface;
use crate::models::Appearance;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

fn body() -> Option<HtmlElement> {
    document()?.body()
}

// =============================================================================
// Scroll Lock Surface
// =============================================================================

/// Locks scrolling by toggling `overflow: hidden` on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn set_locked(&self, locked: bool) {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Apply the resolved theme to `<html data-theme="...">`.
pub fn apply_appearance(appearance: Appearance) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", appearance.as_str());
    }
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

// =============================================================================
// In-page Navigation
// =============================================================================

/// Smoothly scroll the element with the given id into view.
///
/// Returns `false` if no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

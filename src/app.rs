//! Root application module.
//!
//! Contains the main App component, the injected [`ThemeContext`] handle and
//! the [`AppContext`] shared by overlays.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::Page;
use crate::config::PREFERS_DARK_QUERY;
use crate::core::ScrollLocker;
use crate::models::{Portfolio, Theme};
use crate::utils::dom::{self, BodyScroll};

// ============================================================================
// ThemeContext
// ============================================================================

/// Handle to the selected colour theme.
///
/// Created once at the root with an explicit initial theme and passed to the
/// components that read or change it. `Copy` because it only wraps a signal.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Current theme (tracked).
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Advance to the next theme and return it.
    pub fn cycle(&self) -> Theme {
        let next = self.theme.get_untracked().next();
        self.theme.set(next);
        next
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from overlays
/// with `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    /// Selected colour theme.
    pub theme: ThemeContext,
    /// Issues background scroll locks for modal overlays.
    pub scroll: ScrollLocker,
}

impl AppContext {
    pub fn new(theme: ThemeContext, scroll: ScrollLocker) -> Self {
        Self { theme, scroll }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Applies the resolved theme to the document
/// - Loads the bundled content, rendering an error page if it is invalid
#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeContext::new(Theme::default());
    provide_context(AppContext::new(theme, ScrollLocker::new(BodyScroll)));

    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::new(move || {
        dom::apply_appearance(theme.get().resolve(prefers_dark.get()));
    });

    let content = Portfolio::bundled().inspect_err(|e| log::error!("{}", e));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #0a0a0a;
                    color: #e5e5e5;
                    font-family: 'Inter', system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff8c00; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a3a3a3; margin-bottom: 2rem;">
                            "The portfolio content could not be loaded."
                        </p>
                        <ul style="
                            text-align: left;
                            background: #171717;
                            padding: 1rem 1rem 1rem 2rem;
                            border-radius: 8px;
                            color: #f87171;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                </div>
            }
        >
            {content.map(|portfolio| view! { <Page portfolio=portfolio theme=theme /> })}
        </ErrorBoundary>
    }
}

//! Floating theme switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ThemeContext;
use crate::components::icons as ic;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/theme_toggle/theme_toggle.module.css");

/// Cycles System -> Light -> Dark on each click.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    let label = move || theme.get().label();

    view! {
        <button
            class=css::toggle
            aria-label=label
            title=label
            on:click=move |_| {
                let next = theme.cycle();
                log::debug!("theme: {}", next.label());
            }
        >
            {move || {
                let icon = match theme.get() {
                    Theme::System => ic::THEME_SYSTEM,
                    Theme::Light => ic::THEME_LIGHT,
                    Theme::Dark => ic::THEME_DARK,
                };
                view! { <Icon icon=icon /> }
            }}
        </button>
    }
}

//! Reveal-on-scroll wrappers.
//!
//! A [`Reveal`] section fades and slides in the first time it intersects
//! the viewport. [`RevealItem`] children follow with a staggered delay.

use leptos::prelude::*;
use leptos_use::use_intersection_observer;

use crate::config::animation::{ITEM, SECTION};

stylance::import_crate_style!(css, "src/components/reveal/reveal.module.css");

/// Page section revealed once on first intersection.
///
/// # Props
/// - `id`: Anchor id used by in-page navigation
/// - `labelled_by`: Id of the section heading
#[component]
pub fn Reveal(
    #[prop(into)] id: String,
    #[prop(into)] labelled_by: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<leptos::html::Section>::new();
    let (visible, set_visible) = signal(false);

    let _ = use_intersection_observer(target, move |entries, observer| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_visible.set(true);
            observer.disconnect();
        }
    });

    view! {
        <section
            node_ref=target
            id=id
            aria-labelledby=labelled_by
            class=move || {
                if visible.get() {
                    format!("{} {}", css::section, css::visible)
                } else {
                    css::section.to_string()
                }
            }
            style=SECTION.css_vars()
        >
            {children()}
        </section>
    }
}

/// Child of a [`Reveal`] section, delayed by its position.
#[component]
pub fn RevealItem(index: usize, children: Children) -> impl IntoView {
    view! {
        <div class=css::item style=format!("{} --reveal-index: {};", ITEM.css_vars(), index)>
            {children()}
        </div>
    }
}

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::utils::dom;
use crate::utils::format::format_copyright;

#[component]
pub fn Footer(#[prop(into)] owner: String) -> impl IntoView {
    let copyright = format_copyright(dom::current_year(), &owner);

    view! {
        <footer class=css::footer>
            <div>
                <p class=css::muted>{copyright}</p>
                <p class=css::fineprint>"Built with Rust, Leptos and WebAssembly."</p>
            </div>
            <button
                class=css::secondaryButton
                aria-label="Scroll back to top of page"
                on:click=move |_| dom::scroll_to_top()
            >
                <Icon icon=ic::ARROW_UP />
                <span class=css::mono>"Back to top"</span>
            </button>
        </footer>
    }
}

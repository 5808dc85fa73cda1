//! Modal dialogs.
//!
//! [`Modal`] is the shared dialog frame: backdrop, header, Escape handling
//! and a background scroll lock held for as long as it is mounted.

mod project;
mod resume;

pub use project::ProjectModal;
pub use resume::ResumeModal;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::asset_url;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

/// Dialog frame closed by Escape, backdrop click or the close button.
///
/// # Props
/// - `title`: Heading text, also the dialog's accessible name
/// - `icon`: Optional brand image shown before the title
/// - `on_close`: Callback invoked when the dialog should close
/// - `suspended`: While true, Escape is left to an overlay stacked on top
/// - `wide`: Use the tall, wide layout for embedded documents
/// - `actions`: Extra header controls placed before the close button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] icon: Option<String>,
    on_close: Callback<()>,
    #[prop(optional)] suspended: Option<Signal<bool>>,
    #[prop(optional)] wide: bool,
    #[prop(optional, into)] actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let scroll = ctx.scroll.acquire();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || suspended.is_some_and(|s| s.get_untracked()) {
            return;
        }
        ev.prevent_default();
        on_close.run(());
    });
    on_cleanup(move || {
        escape.remove();
        drop(scroll);
    });

    let dialog_class = if wide {
        format!("{} {}", css::dialog, css::wide)
    } else {
        css::dialog.to_string()
    };

    view! {
        <div class=css::backdrop aria-hidden="true" on:click=move |_| on_close.run(()) />
        <div class=css::container>
            <div class=dialog_class role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <header class=css::header>
                    <h2 id="modal-title" class=css::title>
                        {icon
                            .map(|src| {
                                view! {
                                    <img
                                        class=css::titleIcon
                                        src=asset_url(&src)
                                        alt=""
                                        width="24"
                                        height="24"
                                    />
                                }
                            })}
                        <span>{title}</span>
                    </h2>
                    <div class=css::actions>
                        {actions.map(|actions| actions.run())}
                        <button
                            class=css::closeButton
                            aria-label="Close dialog"
                            on:click=move |_| on_close.run(())
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>
                <div class=css::body>{children()}</div>
            </div>
        </div>
    }
}

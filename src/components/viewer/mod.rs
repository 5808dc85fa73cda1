//! Media viewer overlay.
//!
//! Renders a [`MediaViewer`] held in a signal by the owning component.
//! Every control dispatches a [`ViewerEvent`]; the overlay never mutates
//! viewer state directly.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::animation::VIEWER_SLIDE_MS;
use crate::core::{
    DisplayScale, MediaViewer, ViewerEvent, ViewerOutcome, ViewerSession, ZoomLevel,
};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Full-screen image gallery overlay.
///
/// # Props
/// - `viewer`: Viewer state owned by the opener
/// - `alt`: Alt text prefix for the displayed images
/// - `on_close`: Invoked after the viewer transitions to closed
#[component]
pub fn MediaViewerOverlay(
    viewer: RwSignal<MediaViewer>,
    #[prop(into)] alt: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let alt = StoredValue::new(alt);

    let dispatch = Callback::new(move |event: ViewerEvent| {
        let mut outcome = ViewerOutcome::Unchanged;
        viewer.maybe_update(|v| {
            outcome = v.handle(event);
            outcome != ViewerOutcome::Unchanged
        });
        if outcome == ViewerOutcome::Closed {
            on_close.run(());
        }
    });

    // Keyboard shortcuts are live only while a session is open. A consumed
    // key never reaches the window listeners of the layers underneath.
    let keys = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let mut outcome = None;
        viewer.maybe_update(|v| {
            outcome = v.handle_key(&key);
            outcome.is_some_and(|o| o != ViewerOutcome::Unchanged)
        });
        if outcome.is_some() {
            ev.prevent_default();
            ev.stop_immediate_propagation();
        }
        if outcome == Some(ViewerOutcome::Closed) {
            on_close.run(());
        }
    });
    on_cleanup(move || keys.remove());

    let is_open = Memo::new(move |_| viewer.with(MediaViewer::is_open));
    let title = Memo::new(move |_| {
        viewer.with(|v| v.session().and_then(|s| s.title().map(String::from)))
    });
    let counter = Memo::new(move |_| {
        viewer.with(|v| v.session().and_then(ViewerSession::counter_label))
    });
    let current = Memo::new(move |_| {
        viewer.with(|v| v.session().and_then(|s| s.current_image().map(String::from)))
    });
    let index = Memo::new(move |_| {
        viewer.with(|v| v.session().map_or(0, ViewerSession::current_index))
    });
    let count = Memo::new(move |_| viewer.with(|v| v.session().map_or(0, ViewerSession::len)));
    let zoom = Memo::new(move |_| {
        viewer.with(|v| v.session().map(ViewerSession::zoom).unwrap_or_default())
    });
    let fullscreen = Memo::new(move |_| {
        viewer.with(|v| v.session().is_some_and(ViewerSession::is_fullscreen))
    });
    let display = Memo::new(move |_| {
        viewer.with(|v| {
            v.session()
                .map(ViewerSession::display)
                .unwrap_or_else(|| DisplayScale::new(ZoomLevel::FIT, false))
        })
    });
    let error = Memo::new(move |_| {
        viewer.with(|v| v.session().and_then(|s| s.last_error().map(ToString::to_string)))
    });
    let hint = Memo::new(move |_| {
        viewer.with(|v| v.session().map(ViewerSession::hint).unwrap_or_default())
    });

    let dialog_class = move || {
        if fullscreen.get() {
            format!("{} {}", css::dialog, css::fullscreen)
        } else {
            css::dialog.to_string()
        }
    };
    let viewport_class = move || {
        if display.get().is_scrollable() {
            format!("{} {}", css::viewport, css::scrollable)
        } else {
            css::viewport.to_string()
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class=css::backdrop
                aria-hidden="true"
                on:click=move |_| dispatch.run(ViewerEvent::Close)
            />
            <div class=css::container>
                <div
                    class=dialog_class
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=move || title.get().map(|_| "image-modal-title")
                    style=format!("--slide-duration: {}ms;", VIEWER_SLIDE_MS)
                >
                    <header class=css::header>
                        <div class=css::headerLeft>
                            {move || {
                                title
                                    .get()
                                    .map(|t| {
                                        view! {
                                            <h2 id="image-modal-title" class=css::title>
                                                {t}
                                                {move || {
                                                    counter
                                                        .get()
                                                        .map(|c| view! { <span class=css::counter>{c}</span> })
                                                }}
                                            </h2>
                                        }
                                    })
                            }}
                            <ZoomControls zoom=zoom dispatch=dispatch placement=css::zoomDesktop />
                        </div>
                        <div class=css::headerRight>
                            <button
                                class=css::iconButton
                                aria-label=move || {
                                    if fullscreen.get() { "Exit fullscreen" } else { "Enter fullscreen" }
                                }
                                on:click=move |_| dispatch.run(ViewerEvent::ToggleFullscreen)
                            >
                                {move || {
                                    if fullscreen.get() {
                                        view! { <Icon icon=ic::MINIMIZE /> }.into_any()
                                    } else {
                                        view! { <Icon icon=ic::MAXIMIZE /> }.into_any()
                                    }
                                }}
                            </button>
                            <button
                                class=css::iconButton
                                aria-label="Close image viewer"
                                on:click=move |_| dispatch.run(ViewerEvent::Close)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    </header>

                    <div class=css::stage>
                        <Show when=move || { count.get() > 1 }>
                            <button
                                class=format!("{} {}", css::navButton, css::navPrev)
                                aria-label="Previous image"
                                on:click=move |_| dispatch.run(ViewerEvent::Prev)
                            >
                                <Icon icon=ic::CHEVRON_LEFT />
                            </button>
                            <button
                                class=format!("{} {}", css::navButton, css::navNext)
                                aria-label="Next image"
                                on:click=move |_| dispatch.run(ViewerEvent::Next)
                            >
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </button>
                        </Show>

                        <div class=viewport_class style=move || display.get().viewport_style()>
                            <div class=css::frame>
                                {move || match current.get() {
                                    Some(src) => {
                                        let reference = src.clone();
                                        view! {
                                            <img
                                                src=src
                                                alt=move || {
                                                    format!("{} - Image {}", alt.get_value(), index.get() + 1)
                                                }
                                                class=css::image
                                                style=move || display.get().image_style()
                                                on:load=move |_| dispatch.run(ViewerEvent::ImageLoadSucceeded)
                                                on:error=move |_| {
                                                    dispatch.run(ViewerEvent::ImageLoadFailed(reference.clone()))
                                                }
                                            />
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! { <p class=css::empty>"No images available"</p> }.into_any()
                                    }
                                }}
                            </div>
                        </div>

                        {move || {
                            error
                                .get()
                                .map(|message| {
                                    view! {
                                        <p class=css::error role="alert">
                                            {message}
                                        </p>
                                    }
                                })
                        }}

                        <Show when=move || { count.get() > 1 }>
                            <div class=css::dots>
                                {move || {
                                    (0..count.get())
                                        .map(|i| {
                                            view! {
                                                <button
                                                    class=move || {
                                                        if index.get() == i {
                                                            format!("{} {}", css::dot, css::dotActive)
                                                        } else {
                                                            css::dot.to_string()
                                                        }
                                                    }
                                                    aria-label=format!("Go to image {}", i + 1)
                                                    aria-current=move || (index.get() == i).then_some("true")
                                                    on:click=move |_| dispatch.run(ViewerEvent::JumpTo(i))
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>

                        <ZoomControls zoom=zoom dispatch=dispatch placement=css::zoomMobile />
                    </div>

                    <div class=css::hint>{move || hint.get()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Zoom out / level / zoom in / reset cluster.
#[component]
fn ZoomControls(
    zoom: Memo<ZoomLevel>,
    dispatch: Callback<ViewerEvent>,
    #[prop(into)] placement: String,
) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::zoomControls, placement)>
            <button
                class=css::zoomButton
                aria-label="Zoom out"
                disabled=move || zoom.get().is_min()
                on:click=move |_| dispatch.run(ViewerEvent::ZoomOut)
            >
                <Icon icon=ic::ZOOM_OUT />
            </button>
            <span class=css::zoomLevel>{move || zoom.get().to_string()}</span>
            <button
                class=css::zoomButton
                aria-label="Zoom in"
                disabled=move || zoom.get().is_max()
                on:click=move |_| dispatch.run(ViewerEvent::ZoomIn)
            >
                <Icon icon=ic::ZOOM_IN />
            </button>
            <button
                class=css::zoomButton
                aria-label="Reset zoom"
                disabled=move || zoom.get().is_fit()
                on:click=move |_| dispatch.run(ViewerEvent::ResetZoom)
            >
                <Icon icon=ic::RESET_ZOOM />
            </button>
        </div>
    }
}

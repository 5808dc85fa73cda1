//! Project details dialog with a stacked screenshot viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Modal, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sections::StatusBadge;
use crate::components::viewer::MediaViewerOverlay;
use crate::core::MediaViewer;
use crate::models::Project;
use crate::utils::asset_url;
use crate::utils::format::format_period;

/// Project details and screenshot gallery.
///
/// The viewer state is owned here; unmounting the dialog disposes it and
/// releases any scroll lock the viewer still holds.
#[component]
pub fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let viewer = RwSignal::new(MediaViewer::new(ctx.scroll.clone()));
    let viewer_open = Signal::derive(move || viewer.with(MediaViewer::is_open));

    // Focus returns to the opener once the viewer closes
    let design_button = NodeRef::<leptos::html::Button>::new();
    let on_viewer_close = Callback::new(move |_| {
        if let Some(button) = design_button.get_untracked() {
            let _ = button.focus();
        }
    });

    let images: Vec<String> = project.images.iter().map(|path| asset_url(path)).collect();
    let gallery_title = project.gallery_title();
    let alt = format!("{} screenshots", project.title);

    let design = project.has_screenshots().then(|| {
        let label = format!("View {} design", project.title);
        view! {
            <button
                node_ref=design_button
                class=format!("{} {}", css::actionButton, css::actionDesign)
                aria-label=label
                on:click=move |_| {
                    viewer.update(|v| v.open(images.clone(), Some(gallery_title.clone())))
                }
            >
                <Icon icon=ic::IMAGE />
                "View Design"
            </button>
        }
    });
    let live = project.live_url.clone().map(|url| {
        view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class=css::actionButton
                aria-label=format!("View live {}", project.title)
            >
                <Icon icon=ic::EXTERNAL_LINK />
                "Live Demo"
            </a>
        }
    });
    let code = project.github_url.clone().map(|url| {
        view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{} {}", css::actionButton, css::actionCode)
                aria-label=format!("View {} source code", project.title)
            >
                <Icon icon=ic::GITHUB />
                "View Code"
            </a>
        }
    });

    let Project {
        title,
        category,
        status,
        period,
        description,
        long_description,
        technologies,
        features,
        outcomes,
        challenges,
        icon,
        ..
    } = project;

    view! {
        <Modal title=title icon=icon on_close=on_close suspended=viewer_open>
            <div class=css::projectMeta>
                <div class=css::metaLeft>
                    <div class=css::metaRow>
                        <StatusBadge status=status />
                        <span class=css::category>{category}</span>
                    </div>
                    <p class=css::period>
                        <Icon icon=ic::CALENDAR />
                        {format_period(&period)}
                    </p>
                </div>
                <div class=css::actionRow>{design} {live} {code}</div>
            </div>

            <div class=css::block>
                <p class=css::lead>{description}</p>
                {long_description.map(|text| view! { <p class=css::muted>{text}</p> })}
            </div>

            <div class=css::block>
                <h4 class=css::blockHeading>
                    <Icon icon=ic::LIGHTBULB />
                    "/* Technologies Used */"
                </h4>
                <div class=css::chips role="list">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class=css::chip role="listitem">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <BulletBlock heading="/* Key Features */" marker="▸" items=features />
            <BulletBlock
                heading="/* Impact & Outcomes */"
                marker="✓"
                icon=ic::TRENDING_UP
                items=outcomes
            />
            <BulletBlock
                heading="/* Technical Challenges */"
                marker="⚡"
                icon=ic::TARGET
                items=challenges
            />
        </Modal>
        <MediaViewerOverlay viewer=viewer alt=alt on_close=on_viewer_close />
    }
}

/// Titled bullet list, omitted entirely when there are no items.
#[component]
fn BulletBlock(
    heading: &'static str,
    marker: &'static str,
    #[prop(optional)] icon: Option<icondata::Icon>,
    items: Vec<String>,
) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=css::block>
                <h4 class=css::blockHeading>
                    {icon.map(|icon| view! { <Icon icon=icon /> })}
                    {heading}
                </h4>
                <ul class=css::bullets>
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <span class=css::marker aria-hidden="true">{marker}</span>
                                    <span>{item}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
    })
}

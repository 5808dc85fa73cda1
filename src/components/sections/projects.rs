use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Chips, CommentHeading, SectionHeading, StatusBadge, css};
use crate::components::icons as ic;
use crate::components::modal::ProjectModal;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::{PROJECT_CARD_TECH_PREVIEW, sections};
use crate::models::Project;
use crate::utils::format::{format_overflow, format_period};

/// Project cards; clicking one opens its details dialog.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let selected = RwSignal::new(None::<Project>);
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <Reveal id=sections::PROJECTS labelled_by="projects-heading">
            <SectionHeading id="projects-heading" icon=ic::LIGHTBULB title="Freelance Projects" />
            <div class=css::grid>
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <RevealItem index=i>
                                <ProjectCard project=project on_open=Callback::new(move |p| selected.set(Some(p))) />
                            </RevealItem>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class=css::sectionNote>
                <span class=css::mono>"/* "</span>
                "Click on any project above to explore detailed information, features, and technical challenges"
                <span class=css::mono>" */"</span>
            </p>
        </Reveal>
        {move || selected.get().map(|project| view! { <ProjectModal project=project on_close=close /> })}
    }
}

#[component]
fn ProjectCard(project: Project, on_open: Callback<Project>) -> impl IntoView {
    let (shown, hidden) = project.tech_preview(PROJECT_CARD_TECH_PREVIEW);
    let shown = shown.to_vec();
    let overflow = format_overflow(hidden);
    let summary = format!(
        "{} features • {} outcomes",
        project.features.len(),
        project.outcomes.len()
    );
    let label = format!("View details for {}", project.title);
    let period = format_period(&project.period);
    let title = project.title.clone();
    let category = project.category.clone();
    let description = project.description.clone();
    let status = project.status;
    let project = StoredValue::new(project);

    view! {
        <button
            class=format!("{} {}", css::card, css::cardButton)
            aria-label=label
            on:click=move |_| on_open.run(project.get_value())
        >
            <header class=css::cardHeader>
                <span class=css::cardIcon aria-hidden="true">
                    <Icon icon=ic::FOLDER />
                </span>
                <h3 class=css::cardTitle>{title}</h3>
            </header>
            <div class=css::metaRow>
                <StatusBadge status=status />
                <span class=css::accent>{category}</span>
            </div>
            <p class=css::meta>
                <Icon icon=ic::CALENDAR />
                {period}
            </p>
            <p class=css::clamp>{description}</p>
            <CommentHeading text="Tech Stack" />
            <Chips items=shown overflow=overflow />
            <div class=css::cardFooter>
                <span class=css::muted>{summary}</span>
                <span class=css::accent>"Click to view details →"</span>
            </div>
        </button>
    }
}

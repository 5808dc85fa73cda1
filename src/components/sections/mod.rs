//! Page sections rendered from the bundled portfolio content.

mod about;
mod awards;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use awards::AwardsSection;
pub use certifications::CertificationsSection;
pub use contact::ContactSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::ProjectStatus;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Section title with an optional leading icon.
#[component]
pub fn SectionHeading(
    #[prop(into)] id: String,
    #[prop(optional)] icon: Option<icondata::Icon>,
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class=css::heading>
            {icon.map(|icon| view! { <span class=css::headingIcon aria-hidden="true"><Icon icon=icon /></span> })}
            <h2 id=id class=css::headingTitle>{title}</h2>
        </div>
    }
}

/// Coloured project status pill.
#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    let (icon, tone) = match status {
        ProjectStatus::Completed => (ic::STATUS_DONE, css::toneDone),
        ProjectStatus::InProgress => (ic::STATUS_PENDING, css::tonePending),
        ProjectStatus::Planned => (ic::STATUS_PLANNED, css::tonePlanned),
    };
    view! {
        <span class=format!("{} {}", css::badge, tone)>
            <Icon icon=icon />
            {status.label()}
        </span>
    }
}

/// Wrapped list of technology chips.
#[component]
fn Chips(items: Vec<String>, #[prop(optional_no_strip)] overflow: Option<String>) -> impl IntoView {
    view! {
        <div class=css::chips role="list">
            {items
                .into_iter()
                .map(|item| view! { <span class=css::chip role="listitem">{item}</span> })
                .collect::<Vec<_>>()}
            {overflow.map(|label| view! { <span class=css::chipMuted>{label}</span> })}
        </div>
    }
}

/// Code-comment styled sub-heading (`/* Achievements */`).
#[component]
fn CommentHeading(text: &'static str) -> impl IntoView {
    view! { <h4 class=css::comment>{format!("/* {} */", text)}</h4> }
}

/// Bulleted list in the section's muted style.
#[component]
fn Bullets(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class=css::bullets>
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li>
                            <span class=css::marker aria-hidden="true">"▸"</span>
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

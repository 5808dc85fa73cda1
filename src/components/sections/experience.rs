use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Bullets, Chips, CommentHeading, SectionHeading, css};
use crate::components::icons as ic;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::Experience;
use crate::utils::format::format_period;

#[component]
pub fn ExperienceSection(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <Reveal id=sections::EXPERIENCE labelled_by="experience-heading">
            <SectionHeading id="experience-heading" icon=ic::BRIEFCASE title="Work Experience" />
            <div class=css::timeline>
                {experience
                    .into_iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        let period = format_period(&exp.period);
                        view! {
                            <RevealItem index=i>
                                <article class=css::timelineEntry>
                                    <div class=css::entryHeader>
                                        <div>
                                            <h3 class=css::cardTitle>{exp.title}</h3>
                                            <p class=css::accent>{exp.company}</p>
                                            <p class=css::meta>
                                                <Icon icon=ic::LOCATION />
                                                {exp.location}
                                            </p>
                                        </div>
                                        <div class=css::entryAside>
                                            <span class=css::chipMuted>{exp.kind}</span>
                                            <p class=css::meta>{period}</p>
                                        </div>
                                    </div>
                                    <p class=css::muted>{exp.description}</p>
                                    {(!exp.achievements.is_empty())
                                        .then(|| {
                                            view! {
                                                <CommentHeading text="Key Achievements" />
                                                <Bullets items=exp.achievements />
                                            }
                                        })}
                                    {(!exp.technologies.is_empty())
                                        .then(|| {
                                            view! {
                                                <CommentHeading text="Technologies Used" />
                                                <Chips items=exp.technologies />
                                            }
                                        })}
                                </article>
                            </RevealItem>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}

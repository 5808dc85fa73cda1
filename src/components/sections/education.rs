use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Bullets, CommentHeading, SectionHeading, css};
use crate::components::icons as ic;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::Education;
use crate::utils::format::format_period;

#[component]
pub fn EducationSection(education: Vec<Education>) -> impl IntoView {
    view! {
        <Reveal id=sections::EDUCATION labelled_by="education-heading">
            <SectionHeading id="education-heading" icon=ic::EDUCATION title="Education" />
            <div class=css::timeline>
                {education
                    .into_iter()
                    .enumerate()
                    .map(|(i, edu)| {
                        view! {
                            <RevealItem index=i>
                                <article class=css::timelineEntry>
                                    <div class=css::entryHeader>
                                        <div>
                                            <h3 class=css::cardTitle>{edu.degree}</h3>
                                            <p class=css::accent>{edu.institution}</p>
                                            <p class=css::meta>
                                                <Icon icon=ic::LOCATION />
                                                {edu.location}
                                            </p>
                                        </div>
                                        <div class=css::entryAside>
                                            <p class=css::meta>{format_period(&edu.period)}</p>
                                            <p class=css::grade>{edu.grade}</p>
                                        </div>
                                    </div>
                                    {(!edu.achievements.is_empty())
                                        .then(|| {
                                            view! {
                                                <CommentHeading text="Achievements" />
                                                <Bullets items=edu.achievements />
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

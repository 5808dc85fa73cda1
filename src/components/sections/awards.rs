use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, css};
use crate::components::icons as ic;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::Award;

#[component]
pub fn AwardsSection(awards: Vec<Award>) -> impl IntoView {
    view! {
        <Reveal id=sections::AWARDS labelled_by="awards-heading">
            <SectionHeading id="awards-heading" icon=ic::AWARD title="Awards & Honors" />
            <div class=css::grid>
                {awards
                    .into_iter()
                    .enumerate()
                    .map(|(i, award)| {
                        view! {
                            <RevealItem index=i>
                                <article class=css::card>
                                    <div class=css::entryHeader>
                                        <div>
                                            <h3 class=css::cardTitle>{award.title}</h3>
                                            <p class=css::accent>{award.issuer}</p>
                                        </div>
                                        <div class=css::entryAside>
                                            <span class=css::chipMuted>{award.category}</span>
                                            <p class=css::meta>
                                                <Icon icon=ic::CALENDAR />
                                                {award.date}
                                            </p>
                                        </div>
                                    </div>
                                    <p class=css::muted>{award.description}</p>
                                </article>
                            </RevealItem>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}

use leptos::prelude::*;

use super::{CommentHeading, SectionHeading, css};
use crate::components::icons as ic;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::About;

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <Reveal id=sections::ABOUT labelled_by="about-heading">
            <SectionHeading id="about-heading" icon=ic::USER title="About Me" />
            <div class=css::twoColumn>
                <div>
                    <p class=css::prose>{about.introduction}</p>
                    <div class=css::callout>
                        <CommentHeading text="Current Focus" />
                        <p class=css::muted>{about.current_focus}</p>
                    </div>
                </div>
                <div>
                    <CommentHeading text="Key Highlights" />
                    <ul class=css::highlightList>
                        {about
                            .highlights
                            .into_iter()
                            .enumerate()
                            .map(|(i, highlight)| {
                                view! {
                                    <li>
                                        <RevealItem index=i>
                                            <span class=css::marker aria-hidden="true">"▸"</span>
                                            <span>{highlight}</span>
                                        </RevealItem>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <CommentHeading text="Interests" />
                    <div class=css::chips role="list">
                        {about
                            .interests
                            .into_iter()
                            .map(|interest| {
                                view! { <span class=css::chipMuted role="listitem">{interest}</span> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

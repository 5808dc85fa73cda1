use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, css};
use crate::components::icons::{self as ic, icon_for};
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::{SkillCategory, SkillLevel};
use crate::utils::format::format_years;

fn level_class(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => css::levelExpert,
        SkillLevel::Advanced => css::levelAdvanced,
        SkillLevel::Intermediate => css::levelIntermediate,
        SkillLevel::Beginner => css::levelBeginner,
    }
}

#[component]
pub fn SkillsSection(skills: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <Reveal id=sections::SKILLS labelled_by="skills-heading">
            <SectionHeading id="skills-heading" icon=ic::CODE title="Skills & Technologies" />
            <div class=css::grid>
                {skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <RevealItem index=i>
                                <article class=css::card>
                                    <header class=css::cardHeader>
                                        <span class=css::cardIcon title=category.icon.label() aria-hidden="true">
                                            <Icon icon=icon_for(category.icon) />
                                        </span>
                                        <h3 class=css::cardTitle>{category.category}</h3>
                                    </header>
                                    <ul class=css::skillList>
                                        {category
                                            .skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class=css::skill>
                                                        <span>{skill.name}</span>
                                                        <span class=css::skillMeta>
                                                            <span class=level_class(skill.level)>
                                                                {skill.level.label()}
                                                            </span>
                                                            <span class=css::muted>{format_years(skill.years)}</span>
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </article>
                            </RevealItem>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}

//! Landing section.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::modal::ResumeModal;
use crate::config::sections;
use crate::models::PersonalInfo;
use crate::utils::dom;

#[component]
pub fn HeroSection(personal: PersonalInfo) -> impl IntoView {
    let resume_open = RwSignal::new(false);
    let close_resume = Callback::new(move |_| resume_open.set(false));
    let owner = StoredValue::new(personal.name.clone());

    let fields = [
        ("name", personal.name.clone()),
        ("title", personal.title.clone()),
        ("email", personal.email.clone()),
        ("location", personal.location.clone()),
        ("status", "Available for opportunities".to_string()),
    ];
    let last = fields.len() - 1;

    view! {
        <section id=sections::MAIN class=css::hero aria-labelledby="hero-heading">
            <div class=css::prompt>
                <Icon icon=ic::CODE />
                <span>"~/portfolio"</span>
            </div>
            <h1 id="hero-heading" class=css::heroName>{personal.name}</h1>
            <p class=css::heroTitle>{personal.title}</p>
            <p class=css::heroTagline>{personal.tagline}</p>

            <div class=css::codeCard aria-label="Developer summary">
                <div class=css::codeCardBar>
                    <span class=css::trafficRed aria-hidden="true" />
                    <span class=css::trafficYellow aria-hidden="true" />
                    <span class=css::trafficGreen aria-hidden="true" />
                    <span>"developer.rs"</span>
                </div>
                <pre class=css::code>
                    <span class=css::codeKeyword>"let "</span>
                    <span class=css::codeIdent>"developer"</span>
                    " = Developer {\n"
                    {fields
                        .into_iter()
                        .enumerate()
                        .map(|(i, (key, value))| {
                            view! {
                                "    "
                                <span class=css::codeField>{key}</span>
                                ": "
                                <span class=css::codeString>{format!("{:?}", value)}</span>
                                {if i == last { "\n" } else { ",\n" }}
                            }
                        })
                        .collect::<Vec<_>>()}
                    "};"
                </pre>
            </div>

            <div class=css::heroActions>
                <div class=css::availability role="status" aria-live="polite">
                    <span class=css::pulse aria-hidden="true" />
                    <span>"Ready for new opportunities"</span>
                </div>
                <button
                    class=css::primaryButton
                    aria-label="Navigate to contact section"
                    on:click=move |_| {
                        dom::scroll_to_section(sections::CONTACT);
                    }
                >
                    <Icon icon=ic::MAIL />
                    "Get in Touch"
                </button>
                <button
                    class=css::secondaryButton
                    aria-label="View resume"
                    on:click=move |_| resume_open.set(true)
                >
                    <Icon icon=ic::RESUME />
                    "View Resume"
                </button>
            </div>
        </section>
        <Show when=move || resume_open.get()>
            <ResumeModal owner=owner.get_value() on_close=close_resume />
        </Show>
    }
}

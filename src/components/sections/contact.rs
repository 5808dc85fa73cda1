use leptos::prelude::*;
use leptos_icons::Icon;

use super::{CommentHeading, SectionHeading, css};
use crate::components::icons::{self as ic, icon_for};
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::{PersonalInfo, SocialLink};

#[component]
pub fn ContactSection(personal: PersonalInfo, social: Vec<SocialLink>) -> impl IntoView {
    let mailto = format!("mailto:{}", personal.email);
    let mail_label = format!("Send email to {}", personal.email);

    view! {
        <Reveal id=sections::CONTACT labelled_by="contact-heading">
            <SectionHeading id="contact-heading" icon=ic::MAIL title="Get in Touch" />
            <div class=css::twoColumn>
                <div>
                    <CommentHeading text="Let's connect and build something amazing together" />
                    <p class=css::prose>
                        "I'm always interested in new opportunities, collaborations, and interesting projects. "
                        "Whether you have a question, want to discuss a project, or just want to say hello, feel free to reach out!"
                    </p>
                    <div class=css::contactCard>
                        <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::MAIL /></span>
                        <div>
                            <p class=css::label>"Email"</p>
                            <a href=mailto class=css::link aria-label=mail_label>{personal.email}</a>
                        </div>
                    </div>
                    <div class=css::contactCard>
                        <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::LOCATION /></span>
                        <div>
                            <p class=css::label>"Location"</p>
                            <p>{personal.location}</p>
                        </div>
                    </div>
                </div>
                <div>
                    <h3 class=css::cardTitle>"Connect with me"</h3>
                    <CommentHeading text="Find me on these platforms" />
                    <div class=css::socialList>
                        {social
                            .into_iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <RevealItem index=i>
                                        <SocialCard link=link />
                                    </RevealItem>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class=css::callout>
                        <p class=css::availability>
                            <span class=css::pulse aria-hidden="true" />
                            "Available for opportunities"
                        </p>
                        <p class=css::muted>"Currently open to full-time positions and freelance projects"</p>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn SocialCard(link: SocialLink) -> impl IntoView {
    let label = format!("Visit {} profile: {}", link.platform, link.username);
    let tint = format!(
        "color: {0}; background-color: color-mix(in srgb, {0} 15%, transparent);",
        link.color
    );

    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer nofollow"
            class=css::socialCard
            aria-label=label
        >
            <span class=css::socialIcon style=tint title=link.icon.label() aria-hidden="true">
                <Icon icon=icon_for(link.icon) />
            </span>
            <span class=css::socialText>
                <span class=css::socialPlatform>{link.platform}</span>
                <span class=css::muted>{link.username}</span>
            </span>
            <Icon icon=ic::EXTERNAL_LINK />
        </a>
    }
}

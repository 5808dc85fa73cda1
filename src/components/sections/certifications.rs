use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Chips, CommentHeading, SectionHeading, css};
use crate::components::icons as ic;
use crate::components::reveal::{Reveal, RevealItem};
use crate::config::sections;
use crate::models::{Certification, CertificationStatus};

#[component]
pub fn CertificationsSection(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <Reveal id=sections::CERTIFICATIONS labelled_by="certifications-heading">
            <SectionHeading id="certifications-heading" icon=ic::AWARD title="Certifications" />
            <div class=css::grid>
                {certifications
                    .into_iter()
                    .enumerate()
                    .map(|(i, cert)| view! { <RevealItem index=i><CertificationCard cert=cert /></RevealItem> })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    let (badge_icon, tone) = match cert.status {
        CertificationStatus::Completed => (ic::STATUS_DONE, css::toneDone),
        CertificationStatus::InProgress => (ic::STATUS_PENDING, css::tonePending),
    };
    let verify = cert.verification_link().map(|url| {
        view! {
            <a
                href=url.to_string()
                target="_blank"
                rel="noopener noreferrer"
                class=css::link
                aria-label=format!("Verify {} certificate", cert.title)
            >
                "Verify"
                <Icon icon=ic::EXTERNAL_LINK />
            </a>
        }
    });

    view! {
        <article class=css::card>
            <div class=css::entryHeader>
                <div>
                    <h3 class=css::cardTitle>{cert.title}</h3>
                    <p class=css::accent>{cert.issuer}</p>
                    <p class=css::meta>{format!("via {}", cert.platform)}</p>
                </div>
                <div class=css::entryAside>
                    <p class=css::meta>
                        <Icon icon=ic::CALENDAR />
                        {cert.date}
                    </p>
                    <span class=format!("{} {}", css::badge, tone)>
                        <Icon icon=badge_icon />
                        {cert.status.label()}
                    </span>
                </div>
            </div>
            <p class=css::muted>{cert.description}</p>
            {(!cert.skills.is_empty())
                .then(|| {
                    view! {
                        <CommentHeading text="Skills Covered" />
                        <Chips items=cert.skills />
                    }
                })}
            <div class=css::cardFooter>
                <span class=css::mono>{format!("ID: {}", cert.credential_id)}</span>
                {verify}
            </div>
        </article>
    }
}

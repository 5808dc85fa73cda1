//! Single-page layout.
//!
//! Lays out every section in order and attaches the page-level extras:
//! skip link, theme switch, document title and structured data.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::components::sections::{
    AboutSection, AwardsSection, CertificationsSection, ContactSection, EducationSection,
    ExperienceSection, Footer, HeroSection, ProjectsSection, SkillsSection,
};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{SITE_URL, sections};
use crate::core::seo::structured_data_script;
use crate::models::Portfolio;
use crate::utils::dom;
use crate::utils::format::format_document_title;

stylance::import_crate_style!(css, "src/components/page/page.module.css");

#[component]
pub fn Page(portfolio: Portfolio, theme: ThemeContext) -> impl IntoView {
    dom::set_title(&format_document_title(
        &portfolio.personal.name,
        &portfolio.personal.title,
    ));
    let json_ld = structured_data_script(&portfolio, SITE_URL);
    let owner = portfolio.personal.name.clone();

    let Portfolio {
        personal,
        about,
        skills,
        education,
        certifications,
        experience,
        projects,
        awards,
        social,
    } = portfolio;

    view! {
        <script type="application/ld+json" inner_html=json_ld />
        <a class=css::skipLink href=format!("#{}", sections::MAIN)>
            "Skip to main content"
        </a>
        <ThemeToggle theme=theme />
        <div class=css::page>
            <main class=css::container>
                <HeroSection personal=personal.clone() />
                <AboutSection about=about />
                <SkillsSection skills=skills />
                <EducationSection education=education />
                <CertificationsSection certifications=certifications />
                <ExperienceSection experience=experience />
                <ProjectsSection projects=projects />
                <AwardsSection awards=awards />
                <ContactSection personal=personal social=social />
                <Footer owner=owner />
            </main>
        </div>
    }
}

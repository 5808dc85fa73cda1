//! schema.org structured data for search engines.
//!
//! Builds the `Person` JSON-LD document embedded in the page.

use serde_json::{Value, json};

use crate::models::Portfolio;

/// Build the schema.org `Person` document for the portfolio owner.
pub fn structured_data(portfolio: &Portfolio, site_url: &str) -> Value {
    let personal = &portfolio.personal;

    let same_as: Vec<&str> = portfolio.social.iter().map(|l| l.url.as_str()).collect();
    let knows_about: Vec<&str> = portfolio.skill_names().collect();
    let alumni_of: Vec<Value> = portfolio
        .education
        .iter()
        .map(|edu| {
            json!({
                "@type": "EducationalOrganization",
                "name": edu.institution,
                "address": edu.location,
            })
        })
        .collect();
    let works_for: Vec<Value> = portfolio
        .experience
        .iter()
        .map(|exp| {
            json!({
                "@type": "Organization",
                "name": exp.company,
                "address": exp.location,
            })
        })
        .collect();
    let credentials: Vec<Value> = portfolio
        .certifications
        .iter()
        .map(|cert| {
            json!({
                "@type": "EducationalOccupationalCredential",
                "name": cert.title,
                "credentialCategory": "certificate",
                "recognizedBy": {
                    "@type": "Organization",
                    "name": cert.issuer,
                },
                "dateCreated": cert.date,
            })
        })
        .collect();
    let awards: Vec<&str> = portfolio.awards.iter().map(|a| a.title.as_str()).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": personal.name,
        "jobTitle": personal.title,
        "email": personal.email,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": personal.location,
        },
        "url": site_url,
        "sameAs": same_as,
        "knowsAbout": knows_about,
        "alumniOf": alumni_of,
        "worksFor": works_for,
        "hasCredential": credentials,
        "award": awards,
        "description": personal.bio,
    })
}

/// Serialize the document for a `<script type="application/ld+json">` body.
///
/// `<` is escaped so content can never close the script element early.
pub fn structured_data_script(portfolio: &Portfolio, site_url: &str) -> String {
    structured_data(portfolio, site_url)
        .to_string()
        .replace('<', "\\u003c")
}

//! Portfolio content model.
//!
//! Deserialized from the bundled TOML document (`config::PORTFOLIO_TOML`)
//! and handed to the page sections as plain data.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::PORTFOLIO_TOML;
use crate::core::error::ContentError;
use crate::models::IconKind;

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub tagline: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub introduction: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub current_focus: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Proficiency level of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Beginner => "Beginner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub years: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: IconKind,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Free-form start/end labels (`"Dec 2024"`, `"Present"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimePeriod {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: TimePeriod,
    pub grade: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CertificationStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl CertificationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub platform: String,
    pub date: String,
    pub credential_id: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Credential verification link; `"#"` when none exists yet.
    pub verification_url: String,
    pub status: CertificationStatus,
}

impl Certification {
    pub fn verification_link(&self) -> Option<&str> {
        (!self.verification_url.is_empty() && self.verification_url != "#")
            .then_some(self.verification_url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: TimePeriod,
    /// Employment type (`"Full-time"`, `"Contract"`).
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: ProjectStatus,
    pub period: TimePeriod,
    pub description: String,
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    /// Small brand icon shown next to the modal title.
    pub icon: Option<String>,
    /// Screenshot references opened in the media viewer.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    pub fn has_screenshots(&self) -> bool {
        !self.images.is_empty()
    }

    /// Media viewer title for this project's screenshots.
    pub fn gallery_title(&self) -> String {
        format!("{} - Screenshots", self.title)
    }

    /// Technologies shown on the card plus the number left out.
    pub fn tech_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub username: String,
    pub icon: IconKind,
    /// Brand colour used on hover.
    pub color: String,
}

impl Portfolio {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let portfolio: Self = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// The content bundled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml(PORTFOLIO_TOML)
    }

    fn validate(&self) -> Result<(), ContentError> {
        unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        unique_ids(
            "certification",
            self.certifications.iter().map(|c| c.id.as_str()),
        )?;
        unique_ids("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("award", self.awards.iter().map(|a| a.id.as_str()))?;

        for project in &self.projects {
            for (field, value) in [
                ("live_url", &project.live_url),
                ("github_url", &project.github_url),
            ] {
                if value.as_deref() == Some("#") {
                    return Err(ContentError::PlaceholderLink {
                        project: project.id.clone(),
                        field,
                    });
                }
            }
        }
        Ok(())
    }

    /// Every skill name across categories, in order.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.name.as_str()))
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

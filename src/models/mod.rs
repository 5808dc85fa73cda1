//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Portfolio`] and its sections - Bundled page content
//! - [`IconKind`] - Icons a content entry may reference
//! - [`Theme`], [`Appearance`] - Colour theme selection

mod icon;
mod portfolio;
mod theme;

pub use icon::IconKind;
pub use portfolio::{
    About, Award, Certification, CertificationStatus, Education, Experience, PersonalInfo,
    Portfolio, Project, ProjectStatus, Skill, SkillCategory, SkillLevel, SocialLink, TimePeriod,
};
pub use theme::{Appearance, Theme};

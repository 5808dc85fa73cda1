//! Icon identifiers referenced from portfolio content.

use serde::Deserialize;

/// Closed set of icons a skill category or social link may name.
///
/// Content keys that are not listed here fail deserialization instead of
/// falling back to a default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum IconKind {
    Code,
    Monitor,
    Server,
    Wrench,
    #[serde(rename = "design")]
    Design,
    Github,
    Linkedin,
    Twitter,
    Mail,
}

impl IconKind {
    /// Accessible label for the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Monitor => "Monitor",
            Self::Server => "Server",
            Self::Wrench => "Tools",
            Self::Design => "Design",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Mail => "Email",
        }
    }
}

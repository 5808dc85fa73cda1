//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Portfolio content is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Portfolio content rendered by the page sections.
pub const PORTFOLIO_TOML: &str = include_str!("../assets/content/portfolio.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Canonical site URL used in structured data.
pub const SITE_URL: &str = "https://anu-portfolio.vercel.app";

/// Human-readable site name.
pub const SITE_NAME: &str = "Annapurna's Portfolio";

/// Deployment base path prepended to every asset URL.
///
/// Set `FOLIO_BASE_PATH=/portfolio` at build time when the site is served
/// from a sub-path (e.g. GitHub Pages).
pub const BASE_PATH: &str = match option_env!("FOLIO_BASE_PATH") {
    Some(path) => path,
    None => "",
};

/// Résumé PDF location (relative to the base path).
pub const RESUME_PATH: &str = "/resume.pdf";

/// File name offered when downloading the résumé.
pub const RESUME_FILE_NAME: &str = "Annapurna_Patil_Resume.pdf";

/// PDF viewer fragment appended to the résumé URL inside the iframe.
pub const RESUME_VIEWER_PARAMS: &str = "#toolbar=1&navpanes=0&scrollbar=1&view=FitH&zoom=page-width";

// =============================================================================
// Section Anchors
// =============================================================================

/// In-page anchor ids, in render order.
pub mod sections {
    pub const MAIN: &str = "main-content";
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "skills";
    pub const EDUCATION: &str = "education";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "freelance-projects";
    pub const AWARDS: &str = "awards";
    pub const CONTACT: &str = "contact";
}

/// Number of technologies shown on a project card before "+N more".
pub const PROJECT_CARD_TECH_PREVIEW: usize = 4;

// =============================================================================
// Media Viewer Configuration
// =============================================================================

/// Zoom bounds, expressed in quarter steps (1 step = 0.25x).
pub mod zoom {
    /// Smallest zoom level (0.5x).
    pub const MIN_STEPS: u8 = 2;
    /// Fit-to-container zoom level (1.0x).
    pub const FIT_STEPS: u8 = 4;
    /// Largest zoom level (3.0x).
    pub const MAX_STEPS: u8 = 12;
    /// Ratio represented by one step.
    pub const STEP_RATIO: f64 = 0.25;
}

/// Bounding boxes for the image viewport (CSS lengths).
pub mod viewer {
    /// Max image width at fit zoom, windowed.
    pub const WINDOWED_MAX_WIDTH: &str = "calc(100vw - 4rem)";
    /// Max image height at fit zoom, windowed.
    pub const WINDOWED_MAX_HEIGHT: &str = "calc(90vh - 120px)";
    /// Max image width at fit zoom, fullscreen.
    pub const FULLSCREEN_MAX_WIDTH: &str = "calc(100vw - 2rem)";
    /// Max image height at fit zoom, fullscreen.
    pub const FULLSCREEN_MAX_HEIGHT: &str = "calc(100vh - 120px)";
    /// Viewport height below the header, windowed.
    pub const WINDOWED_VIEWPORT_HEIGHT: &str = "calc(90vh - 80px)";
    /// Viewport height below the header, fullscreen.
    pub const FULLSCREEN_VIEWPORT_HEIGHT: &str = "calc(100vh - 80px)";
}

// =============================================================================
// Animation Configuration
// =============================================================================

/// Presentation timing handed to the stylesheet as CSS custom properties.
pub mod animation {
    /// Timing of a reveal-on-scroll transition.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct RevealTiming {
        /// Fade/slide duration in milliseconds.
        pub duration_ms: u32,
        /// Delay between staggered children in milliseconds.
        pub stagger_ms: u32,
        /// Initial vertical offset in pixels.
        pub offset_px: u32,
    }

    impl RevealTiming {
        /// Inline style exposing the timing as CSS variables.
        pub fn css_vars(&self) -> String {
            format!(
                "--reveal-duration: {}ms; --reveal-stagger: {}ms; --reveal-offset: {}px;",
                self.duration_ms, self.stagger_ms, self.offset_px
            )
        }
    }

    /// Whole sections sliding into view.
    pub const SECTION: RevealTiming = RevealTiming {
        duration_ms: 600,
        stagger_ms: 100,
        offset_px: 50,
    };

    /// Cards inside a section.
    pub const ITEM: RevealTiming = RevealTiming {
        duration_ms: 400,
        stagger_ms: 100,
        offset_px: 20,
    };

    /// Image crossfade when the viewer changes image.
    pub const VIEWER_SLIDE_MS: u32 = 300;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Media query used to resolve `Theme::System`.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

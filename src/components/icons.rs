//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAward as Award, LuBriefcase as Briefcase, LuCalendar as Calendar,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuCircleAlert as StatusPlanned, LuCircleCheck as StatusDone, LuClock as StatusPending,
        LuCode as Code, LuDownload as Download, LuExternalLink as ExternalLink,
        LuFileText as Resume, LuFolderOpen as Folder, LuGithub as Github,
        LuGraduationCap as Education, LuImage as Image, LuLightbulb as Lightbulb,
        LuLinkedin as Linkedin, LuMail as Mail, LuMapPin as Location, LuMaximize2 as Maximize,
        LuMinimize2 as Minimize, LuMonitor as Monitor, LuMonitor as SystemTheme,
        LuMoon as DarkTheme, LuPalette as Design, LuRotateCcw as ResetZoom, LuServer as Server,
        LuSun as LightTheme, LuTarget as Target, LuTrendingUp as TrendingUp,
        LuTwitter as Twitter, LuArrowUp as ArrowUp, LuUser as User, LuWrench as Wrench,
        LuX as Close, LuZoomIn as ZoomIn, LuZoomOut as ZoomOut,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as ResetZoom, BsArrowUp as ArrowUp,
        BsArrowsFullscreen as Maximize, BsAward as Award, BsBoxArrowUpRight as ExternalLink,
        BsBriefcase as Briefcase, BsBullseye as Target, BsCalendar as Calendar,
        BsCheckCircle as StatusDone, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsCircleHalf as SystemTheme, BsClock as StatusPending,
        BsCodeSlash as Code, BsDisplay as Monitor, BsDownload as Download,
        BsEnvelope as Mail, BsExclamationCircle as StatusPlanned,
        BsFileEarmarkText as Resume, BsFolder2Open as Folder, BsFullscreenExit as Minimize,
        BsGeoAltFill as Location, BsGithub as Github, BsGraphUpArrow as TrendingUp,
        BsImage as Image, BsLightbulb as Lightbulb, BsLinkedin as Linkedin,
        BsMoon as DarkTheme, BsMortarboard as Education, BsPalette as Design,
        BsPerson as User, BsServer as Server, BsSun as LightTheme, BsTwitter as Twitter,
        BsWrench as Wrench, BsXLg as Close, BsZoomIn as ZoomIn, BsZoomOut as ZoomOut,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Viewer controls
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ZOOM_IN, ZoomIn);
themed_icon!(ZOOM_OUT, ZoomOut);
themed_icon!(RESET_ZOOM, ResetZoom);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(MINIMIZE, Minimize);

// Theme toggle
themed_icon!(THEME_SYSTEM, SystemTheme);
themed_icon!(THEME_LIGHT, LightTheme);
themed_icon!(THEME_DARK, DarkTheme);

// Sections and badges
themed_icon!(USER, User);
themed_icon!(LOCATION, Location);
themed_icon!(CALENDAR, Calendar);
themed_icon!(EDUCATION, Education);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(AWARD, Award);
themed_icon!(FOLDER, Folder);
themed_icon!(LIGHTBULB, Lightbulb);
themed_icon!(TARGET, Target);
themed_icon!(TRENDING_UP, TrendingUp);
themed_icon!(IMAGE, Image);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);
themed_icon!(RESUME, Resume);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(STATUS_DONE, StatusDone);
themed_icon!(STATUS_PENDING, StatusPending);
themed_icon!(STATUS_PLANNED, StatusPlanned);

// Content-referenced icons
themed_icon!(CODE, Code);
themed_icon!(MONITOR, Monitor);
themed_icon!(SERVER, Server);
themed_icon!(WRENCH, Wrench);
themed_icon!(DESIGN, Design);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(TWITTER, Twitter);
themed_icon!(MAIL, Mail);

/// Icon for a content-referenced [`IconKind`].
pub const fn icon_for(kind: IconKind) -> Icon {
    match kind {
        IconKind::Code => CODE,
        IconKind::Monitor => MONITOR,
        IconKind::Server => SERVER,
        IconKind::Wrench => WRENCH,
        IconKind::Design => DESIGN,
        IconKind::Github => GITHUB,
        IconKind::Linkedin => LINKEDIN,
        IconKind::Twitter => TWITTER,
        IconKind::Mail => MAIL,
    }
}

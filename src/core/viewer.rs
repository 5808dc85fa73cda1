//! Media viewer state machine.
//!
//! The viewer is either closed or open with a [`ViewerSession`] describing the
//! image sequence, the current position, zoom, fullscreen flag and the last
//! load failure. All transitions are synchronous and total except
//! [`MediaViewer::jump_to`], whose index precondition is enforced with a panic.
//!
//! ```text
//!            open(images, title)
//!   Closed ─────────────────────────▶ Open(session)
//!     ▲                                  │  next / prev / jump_to
//!     │   close / Escape / backdrop      │  zoom_in / zoom_out / reset_zoom
//!     └──────────────────────────────────┤  toggle_fullscreen
//!                                        │  image_load_failed / _succeeded
//!                                        └──▶ Open(session')
//! ```
//!
//! The scroll lock guard lives inside the open state, so every path back to
//! closed (including dropping the viewer) releases it.

use std::fmt;

use crate::config::zoom;
use crate::core::display::DisplayScale;
use crate::core::error::ImageLoadFailure;
use crate::core::scroll_lock::{ScrollLock, ScrollLocker};

// ============================================================================
// ZoomLevel
// ============================================================================

/// Zoom ratio in `[0.5, 3.0]`, stored as a count of 0.25 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: Self = Self(zoom::MIN_STEPS);
    pub const FIT: Self = Self(zoom::FIT_STEPS);
    pub const MAX: Self = Self(zoom::MAX_STEPS);

    /// One step larger, saturating at [`ZoomLevel::MAX`].
    pub fn step_in(self) -> Self {
        Self((self.0 + 1).min(zoom::MAX_STEPS))
    }

    /// One step smaller, saturating at [`ZoomLevel::MIN`].
    pub fn step_out(self) -> Self {
        Self(self.0.saturating_sub(1).max(zoom::MIN_STEPS))
    }

    #[inline]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) * zoom::STEP_RATIO
    }

    /// Rounded percentage (`1.25` -> `125`).
    #[inline]
    pub fn percent(self) -> u16 {
        u16::from(self.0) * 25
    }

    #[inline]
    pub fn is_fit(self) -> bool {
        self == Self::FIT
    }

    #[inline]
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }

    #[inline]
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::FIT
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

// ============================================================================
// ViewerSession
// ============================================================================

/// In-memory state of an open viewer.
///
/// Created fresh on every open and discarded on close.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    images: Vec<String>,
    title: Option<String>,
    current_index: usize,
    zoom: ZoomLevel,
    fullscreen: bool,
    last_error: Option<ImageLoadFailure>,
}

impl ViewerSession {
    pub fn new(images: Vec<String>, title: Option<String>) -> Self {
        Self {
            images,
            title,
            current_index: 0,
            zoom: ZoomLevel::FIT,
            fullscreen: false,
            last_error: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether carousel navigation (arrows, dots, arrow keys) applies.
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Reference of the image on display, `None` for an empty gallery.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn last_error(&self) -> Option<&ImageLoadFailure> {
        self.last_error.as_ref()
    }

    /// Layout derived from zoom and fullscreen; never stored.
    pub fn display(&self) -> DisplayScale {
        DisplayScale::new(self.zoom, self.fullscreen)
    }

    /// Position label such as `(2/5)`; empty for single-image galleries.
    pub fn counter_label(&self) -> Option<String> {
        self.has_multiple()
            .then(|| format!("({}/{})", self.current_index + 1, self.images.len()))
    }

    /// Usage hint shown in the corner of the viewer.
    pub fn hint(&self) -> String {
        if self.has_multiple() {
            format!(
                "{} images • Use arrows or ←/→ to navigate",
                self.images.len()
            )
        } else if self.zoom.is_fit() {
            "Use zoom controls to enlarge".to_string()
        } else {
            "Scroll to navigate zoomed image".to_string()
        }
    }

    pub fn next_image(&mut self) -> bool {
        if !self.has_multiple() {
            return false;
        }
        let next = (self.current_index + 1) % self.images.len();
        self.show(next);
        true
    }

    pub fn prev_image(&mut self) -> bool {
        if !self.has_multiple() {
            return false;
        }
        let len = self.images.len();
        let prev = (self.current_index + len - 1) % len;
        self.show(prev);
        true
    }

    /// Show the image at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; a caller asking for a missing image
    /// is a bug rather than something to clamp.
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.images.len(),
            "jump_to index {} out of range for {} images",
            index,
            self.images.len()
        );
        self.show(index);
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.step_in())
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.step_out())
    }

    /// Back to fit; also drops any pending load error.
    pub fn reset_zoom(&mut self) -> bool {
        let cleared = self.last_error.take().is_some();
        self.set_zoom(ZoomLevel::FIT) || cleared
    }

    /// Flip fullscreen; zoom is left untouched.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn image_load_failed(&mut self, reference: &str) {
        let failure = ImageLoadFailure::new(reference);
        log::warn!("{}", failure);
        self.last_error = Some(failure);
    }

    pub fn image_load_succeeded(&mut self) -> bool {
        self.last_error.take().is_some()
    }

    /// Move to `index` with a fresh zoom and no pending error.
    fn show(&mut self, index: usize) {
        self.current_index = index;
        self.zoom = ZoomLevel::FIT;
        self.last_error = None;
    }

    fn set_zoom(&mut self, zoom: ZoomLevel) -> bool {
        let changed = self.zoom != zoom;
        self.zoom = zoom;
        changed
    }
}

// ============================================================================
// Events
// ============================================================================

/// Input the viewer reacts to while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    Close,
    Next,
    Prev,
    JumpTo(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    ImageLoadFailed(String),
    ImageLoadSucceeded,
}

/// Keyboard keys bound to viewer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl ViewerKey {
    /// Parse a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "+" | "=" => Some(Self::ZoomIn),
            "-" | "_" => Some(Self::ZoomOut),
            "0" => Some(Self::ResetZoom),
            _ => None,
        }
    }

    pub fn event(self) -> ViewerEvent {
        match self {
            Self::Escape => ViewerEvent::Close,
            Self::ArrowLeft => ViewerEvent::Prev,
            Self::ArrowRight => ViewerEvent::Next,
            Self::ZoomIn => ViewerEvent::ZoomIn,
            Self::ZoomOut => ViewerEvent::ZoomOut,
            Self::ResetZoom => ViewerEvent::ResetZoom,
        }
    }
}

/// What a handled event did to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// Nothing observable changed.
    Unchanged,
    /// The open session changed.
    Updated,
    /// The viewer transitioned to closed; the host should be notified.
    Closed,
}

impl ViewerOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Updated
        } else {
            Self::Unchanged
        }
    }
}

// ============================================================================
// MediaViewer
// ============================================================================

enum ViewerState {
    Closed,
    Open {
        session: ViewerSession,
        _scroll: ScrollLock,
    },
}

/// Overlay image viewer: closed, or open with a session and a scroll lock.
pub struct MediaViewer {
    state: ViewerState,
    locker: ScrollLocker,
}

impl MediaViewer {
    pub fn new(locker: ScrollLocker) -> Self {
        Self {
            state: ViewerState::Closed,
            locker,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn session(&self) -> Option<&ViewerSession> {
        match &self.state {
            ViewerState::Open { session, .. } => Some(session),
            ViewerState::Closed => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut ViewerSession> {
        match &mut self.state {
            ViewerState::Open { session, .. } => Some(session),
            ViewerState::Closed => None,
        }
    }

    /// Open with a fresh session.
    ///
    /// Re-opening an open viewer replaces the session and keeps the lock.
    pub fn open(&mut self, images: Vec<String>, title: Option<String>) {
        log::debug!(
            "media viewer open: {} image(s), title {:?}",
            images.len(),
            title
        );
        let session = ViewerSession::new(images, title);
        match &mut self.state {
            ViewerState::Open { session: current, .. } => *current = session,
            ViewerState::Closed => {
                self.state = ViewerState::Open {
                    session,
                    _scroll: self.locker.acquire(),
                };
            }
        }
    }

    /// Close and discard the session. Returns whether the viewer was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            log::debug!("media viewer closed");
        }
        self.state = ViewerState::Closed;
        was_open
    }

    /// Apply an event, reporting what happened.
    ///
    /// Events arriving while closed are ignored.
    ///
    /// # Panics
    ///
    /// Panics on [`ViewerEvent::JumpTo`] with an out-of-range index.
    pub fn handle(&mut self, event: ViewerEvent) -> ViewerOutcome {
        if event == ViewerEvent::Close {
            return if self.close() {
                ViewerOutcome::Closed
            } else {
                ViewerOutcome::Unchanged
            };
        }

        let Some(session) = self.session_mut() else {
            return ViewerOutcome::Unchanged;
        };

        let changed = match event {
            ViewerEvent::Next => session.next_image(),
            ViewerEvent::Prev => session.prev_image(),
            ViewerEvent::JumpTo(index) => {
                session.jump_to(index);
                true
            }
            ViewerEvent::ZoomIn => session.zoom_in(),
            ViewerEvent::ZoomOut => session.zoom_out(),
            ViewerEvent::ResetZoom => session.reset_zoom(),
            ViewerEvent::ToggleFullscreen => {
                session.toggle_fullscreen();
                true
            }
            ViewerEvent::ImageLoadFailed(reference) => {
                session.image_load_failed(&reference);
                true
            }
            ViewerEvent::ImageLoadSucceeded => session.image_load_succeeded(),
            ViewerEvent::Close => unreachable!("close handled above"),
        };

        ViewerOutcome::from_changed(changed)
    }

    pub fn next_image(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::Next)
    }

    pub fn prev_image(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::Prev)
    }

    /// # Panics
    ///
    /// Panics if the viewer is open and `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> ViewerOutcome {
        self.handle(ViewerEvent::JumpTo(index))
    }

    pub fn zoom_in(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::ZoomOut)
    }

    pub fn reset_zoom(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::ResetZoom)
    }

    pub fn toggle_fullscreen(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::ToggleFullscreen)
    }

    pub fn image_load_failed(&mut self, reference: &str) -> ViewerOutcome {
        self.handle(ViewerEvent::ImageLoadFailed(reference.to_string()))
    }

    pub fn image_load_succeeded(&mut self) -> ViewerOutcome {
        self.handle(ViewerEvent::ImageLoadSucceeded)
    }

    /// Handle a key press. Unbound keys are `None` so the browser keeps them.
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerOutcome> {
        if !self.is_open() {
            return None;
        }
        ViewerKey::from_key(key).map(|k| self.handle(k.event()))
    }
}

impl fmt::Debug for MediaViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaViewer")
            .field("session", &self.session())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll_lock::RecordingSurface;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn open_viewer(names: &[&str]) -> (MediaViewer, ScrollLocker) {
        let locker = ScrollLocker::new(RecordingSurface::default());
        let mut viewer = MediaViewer::new(locker.clone());
        viewer.open(images(names), Some("Gallery".to_string()));
        (viewer, locker)
    }

    // ------------------------------------------------------------------------
    // ZoomLevel
    // ------------------------------------------------------------------------

    #[test]
    fn test_zoom_defaults_to_fit() {
        assert_eq!(ZoomLevel::default(), ZoomLevel::FIT);
        assert_eq!(ZoomLevel::FIT.ratio(), 1.0);
        assert_eq!(ZoomLevel::MIN.ratio(), 0.5);
        assert_eq!(ZoomLevel::MAX.ratio(), 3.0);
    }

    #[test]
    fn test_zoom_saturates() {
        assert_eq!(ZoomLevel::MAX.step_in(), ZoomLevel::MAX);
        assert_eq!(ZoomLevel::MIN.step_out(), ZoomLevel::MIN);
        assert_eq!(ZoomLevel::FIT.step_in().ratio(), 1.25);
        assert_eq!(ZoomLevel::FIT.step_out().ratio(), 0.75);
    }

    #[test]
    fn test_zoom_display() {
        assert_eq!(ZoomLevel::FIT.to_string(), "100%");
        assert_eq!(ZoomLevel::FIT.step_in().step_in().to_string(), "150%");
        assert_eq!(ZoomLevel::MIN.to_string(), "50%");
    }

    // ------------------------------------------------------------------------
    // ViewerSession
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_session_defaults() {
        let session = ViewerSession::new(images(&["a.png"]), None);
        assert_eq!(session.current_index(), 0);
        assert!(session.zoom().is_fit());
        assert!(!session.is_fullscreen());
        assert!(session.last_error().is_none());
        assert_eq!(session.current_image(), Some("a.png"));
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut session = ViewerSession::new(images(&["a", "b", "c"]), None);
        session.next_image();
        session.next_image();
        assert_eq!(session.current_index(), 2);
        session.next_image();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut session = ViewerSession::new(images(&["a", "b", "c"]), None);
        session.prev_image();
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_image(), Some("c"));
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        let mut session = ViewerSession::new(images(&["only.png"]), None);
        session.zoom_in();
        session.image_load_failed("only.png");
        let before = session.clone();

        assert!(!session.next_image());
        assert!(!session.prev_image());
        assert_eq!(session, before);
    }

    #[test]
    fn test_empty_session() {
        let mut session = ViewerSession::new(Vec::new(), None);
        assert!(session.is_empty());
        assert_eq!(session.current_image(), None);
        assert!(!session.next_image());
        assert!(!session.prev_image());
        assert_eq!(session.counter_label(), None);
    }

    #[test]
    fn test_navigation_resets_zoom_and_error() {
        let mut session = ViewerSession::new(images(&["a", "b", "c"]), None);
        session.zoom_in();
        session.image_load_failed("a");
        session.next_image();
        assert!(session.zoom().is_fit());
        assert!(session.last_error().is_none());

        session.zoom_out();
        session.image_load_failed("b");
        session.jump_to(0);
        assert_eq!(session.current_index(), 0);
        assert!(session.zoom().is_fit());
        assert!(session.last_error().is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_to_out_of_range_panics() {
        let mut session = ViewerSession::new(images(&["a", "b"]), None);
        session.jump_to(2);
    }

    #[test]
    fn test_fullscreen_preserves_zoom() {
        let mut session = ViewerSession::new(images(&["a"]), None);
        session.zoom_in();
        session.toggle_fullscreen();
        assert!(session.is_fullscreen());
        assert_eq!(session.zoom().ratio(), 1.25);
        session.toggle_fullscreen();
        assert!(!session.is_fullscreen());
        assert_eq!(session.zoom().ratio(), 1.25);
    }

    #[test]
    fn test_counter_and_hint() {
        let mut multi = ViewerSession::new(images(&["a", "b", "c"]), None);
        multi.next_image();
        assert_eq!(multi.counter_label().as_deref(), Some("(2/3)"));
        assert_eq!(multi.hint(), "3 images • Use arrows or ←/→ to navigate");

        let mut single = ViewerSession::new(images(&["a"]), None);
        assert_eq!(single.hint(), "Use zoom controls to enlarge");
        single.zoom_out();
        assert_eq!(single.hint(), "Scroll to navigate zoomed image");
    }

    #[test]
    fn test_load_success_reports_change() {
        let mut session = ViewerSession::new(images(&["a"]), None);
        assert!(!session.image_load_succeeded());
        session.image_load_failed("a");
        assert!(session.image_load_succeeded());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_reset_zoom_clears_error() {
        let mut session = ViewerSession::new(images(&["a"]), None);
        session.image_load_failed("a");
        assert!(session.reset_zoom());
        assert!(session.last_error().is_none());
        assert!(!session.reset_zoom());
    }

    // ------------------------------------------------------------------------
    // MediaViewer
    // ------------------------------------------------------------------------

    #[test]
    fn test_open_acquires_and_close_releases_lock() {
        let (mut viewer, locker) = open_viewer(&["a", "b"]);
        assert!(viewer.is_open());
        assert!(locker.is_locked());

        assert!(viewer.close());
        assert!(!viewer.is_open());
        assert!(!locker.is_locked());
    }

    #[test]
    fn test_close_when_closed_is_unchanged() {
        let locker = ScrollLocker::new(RecordingSurface::default());
        let mut viewer = MediaViewer::new(locker);
        assert!(!viewer.close());
        assert_eq!(viewer.handle(ViewerEvent::Close), ViewerOutcome::Unchanged);
    }

    #[test]
    fn test_events_ignored_while_closed() {
        let locker = ScrollLocker::new(RecordingSurface::default());
        let mut viewer = MediaViewer::new(locker);
        assert_eq!(viewer.next_image(), ViewerOutcome::Unchanged);
        assert_eq!(viewer.zoom_in(), ViewerOutcome::Unchanged);
        assert_eq!(viewer.jump_to(5), ViewerOutcome::Unchanged);
        assert!(viewer.session().is_none());
    }

    #[test]
    fn test_close_event_reports_closed() {
        let (mut viewer, _locker) = open_viewer(&["a"]);
        assert_eq!(viewer.handle(ViewerEvent::Close), ViewerOutcome::Closed);
        assert!(viewer.session().is_none());
    }

    #[test]
    fn test_reopen_replaces_session_and_keeps_single_lock() {
        let (mut viewer, locker) = open_viewer(&["a", "b"]);
        viewer.next_image();
        viewer.toggle_fullscreen();

        viewer.open(images(&["x", "y", "z"]), None);
        let session = viewer.session().expect("viewer is open");
        assert_eq!(session.len(), 3);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_fullscreen());
        assert_eq!(locker.holders(), 1);
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let (viewer, locker) = open_viewer(&["a"]);
        assert!(locker.is_locked());
        drop(viewer);
        assert!(!locker.is_locked());
    }

    #[test]
    fn test_outcomes_reflect_changes() {
        let (mut viewer, _locker) = open_viewer(&["a"]);
        assert_eq!(viewer.next_image(), ViewerOutcome::Unchanged);
        assert_eq!(viewer.reset_zoom(), ViewerOutcome::Unchanged);
        assert_eq!(viewer.zoom_in(), ViewerOutcome::Updated);
        assert_eq!(viewer.toggle_fullscreen(), ViewerOutcome::Updated);
        assert_eq!(viewer.image_load_failed("a"), ViewerOutcome::Updated);
        assert_eq!(viewer.image_load_succeeded(), ViewerOutcome::Updated);
        assert_eq!(viewer.image_load_succeeded(), ViewerOutcome::Unchanged);
    }

    #[test]
    fn test_key_bindings() {
        let (mut viewer, _locker) = open_viewer(&["a", "b", "c"]);

        assert_eq!(viewer.handle_key("ArrowRight"), Some(ViewerOutcome::Updated));
        assert_eq!(viewer.session().map(|s| s.current_index()), Some(1));

        assert_eq!(viewer.handle_key("ArrowLeft"), Some(ViewerOutcome::Updated));
        assert_eq!(viewer.session().map(|s| s.current_index()), Some(0));

        assert_eq!(viewer.handle_key("+"), Some(ViewerOutcome::Updated));
        assert_eq!(viewer.handle_key("0"), Some(ViewerOutcome::Updated));
        assert_eq!(viewer.handle_key("q"), None);

        assert_eq!(viewer.handle_key("Escape"), Some(ViewerOutcome::Closed));
        assert_eq!(viewer.handle_key("Escape"), None);
    }

    #[test]
    fn test_arrow_keys_inert_for_single_image() {
        let (mut viewer, _locker) = open_viewer(&["a"]);
        assert_eq!(viewer.handle_key("ArrowRight"), Some(ViewerOutcome::Unchanged));
        assert_eq!(viewer.handle_key("ArrowLeft"), Some(ViewerOutcome::Unchanged));
    }

    #[test]
    fn test_view_key_parsing() {
        assert_eq!(ViewerKey::from_key("Escape"), Some(ViewerKey::Escape));
        assert_eq!(ViewerKey::from_key("="), Some(ViewerKey::ZoomIn));
        assert_eq!(ViewerKey::from_key("_"), Some(ViewerKey::ZoomOut));
        assert_eq!(ViewerKey::from_key("Enter"), None);
        assert_eq!(ViewerKey::ArrowLeft.event(), ViewerEvent::Prev);
    }
}

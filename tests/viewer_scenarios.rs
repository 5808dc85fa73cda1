//! Media viewer behaviour through the public library API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use folio::core::{MediaViewer, ScrollLocker, ScrollSurface, ViewerEvent, ViewerOutcome, ZoomLevel};
use folio::models::Portfolio;

#[derive(Clone, Default)]
struct CountingSurface {
    locks: Arc<AtomicUsize>,
    unlocks: Arc<AtomicUsize>,
}

impl CountingSurface {
    fn locks(&self) -> usize {
        self.locks.load(Ordering::SeqCst)
    }

    fn unlocks(&self) -> usize {
        self.unlocks.load(Ordering::SeqCst)
    }
}

impl ScrollSurface for CountingSurface {
    fn set_locked(&self, locked: bool) {
        if locked {
            self.locks.fetch_add(1, Ordering::SeqCst);
        } else {
            self.unlocks.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn viewer() -> (MediaViewer, CountingSurface) {
    let surface = CountingSurface::default();
    (MediaViewer::new(ScrollLocker::new(surface.clone())), surface)
}

fn gallery(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn index(viewer: &MediaViewer) -> usize {
    viewer.session().map(|s| s.current_index()).expect("viewer is open")
}

fn zoom(viewer: &MediaViewer) -> ZoomLevel {
    viewer.session().map(|s| s.zoom()).expect("viewer is open")
}

#[test]
fn test_next_cycles_back_to_start() {
    for n in 2..6 {
        let (mut viewer, _) = viewer();
        let names: Vec<String> = (0..n).map(|i| format!("{}.png", i)).collect();
        viewer.open(names, None);
        viewer.jump_to(1);
        for _ in 0..n {
            viewer.next_image();
        }
        assert_eq!(index(&viewer), 1, "gallery of {}", n);
    }
}

#[test]
fn test_zoom_stays_within_bounds() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["a.png"]), None);

    for _ in 0..10 {
        viewer.zoom_in();
        let ratio = zoom(&viewer).ratio();
        assert!((0.5..=3.0).contains(&ratio));
    }
    assert_eq!(zoom(&viewer).ratio(), 3.0);

    for _ in 0..20 {
        viewer.zoom_out();
    }
    assert_eq!(zoom(&viewer).ratio(), 0.5);
}

#[test]
fn test_eight_steps_reach_maximum() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["a.png"]), None);
    for _ in 0..8 {
        viewer.zoom_in();
    }
    assert_eq!(zoom(&viewer), ZoomLevel::MAX);
    assert_eq!(viewer.zoom_in(), ViewerOutcome::Unchanged);
}

#[test]
fn test_navigation_resets_zoom_and_error() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["a.png", "b.png"]), None);
    viewer.zoom_in();
    viewer.image_load_failed("a.png");

    viewer.next_image();
    let session = viewer.session().expect("viewer is open");
    assert!(session.zoom().is_fit());
    assert!(session.last_error().is_none());

    viewer.zoom_out();
    viewer.prev_image();
    assert!(zoom(&viewer).is_fit());
}

#[test]
fn test_single_image_navigation_is_noop() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["only.png"]), None);
    viewer.zoom_in();

    assert_eq!(viewer.next_image(), ViewerOutcome::Unchanged);
    assert_eq!(viewer.prev_image(), ViewerOutcome::Unchanged);
    assert_eq!(index(&viewer), 0);
    // a no-op navigation keeps the zoom
    assert!(!zoom(&viewer).is_fit());

    viewer.open(Vec::new(), None);
    assert_eq!(viewer.next_image(), ViewerOutcome::Unchanged);
    assert!(viewer.session().is_some_and(|s| s.current_image().is_none()));
}

#[test]
fn test_gallery_scenario() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["a.png", "b.png", "c.png"]), Some("Shots".to_string()));

    viewer.next_image();
    viewer.next_image();
    assert_eq!(index(&viewer), 2);
    viewer.next_image();
    assert_eq!(index(&viewer), 0);
    viewer.prev_image();
    assert_eq!(index(&viewer), 2);

    let session = viewer.session().expect("viewer is open");
    assert_eq!(session.current_image(), Some("c.png"));
    assert_eq!(session.counter_label().as_deref(), Some("(3/3)"));
}

#[test]
fn test_reopen_after_close_has_fresh_defaults() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["a.png", "b.png"]), Some("First".to_string()));
    viewer.next_image();
    viewer.zoom_in();
    viewer.toggle_fullscreen();
    viewer.image_load_failed("b.png");

    assert_eq!(viewer.handle(ViewerEvent::Close), ViewerOutcome::Closed);
    viewer.open(gallery(&["x.png"]), None);

    let session = viewer.session().expect("viewer is open");
    assert_eq!(session.current_index(), 0);
    assert!(session.zoom().is_fit());
    assert!(!session.is_fullscreen());
    assert!(session.last_error().is_none());
    assert_eq!(session.title(), None);
}

#[test]
fn test_error_set_and_cleared() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["x.png", "y.png"]), None);

    viewer.image_load_failed("x.png");
    let message = viewer
        .session()
        .and_then(|s| s.last_error())
        .map(ToString::to_string)
        .expect("error recorded");
    assert!(message.contains("x.png"));

    assert_eq!(viewer.image_load_succeeded(), ViewerOutcome::Updated);
    assert!(viewer.session().is_some_and(|s| s.last_error().is_none()));

    viewer.image_load_failed("x.png");
    viewer.next_image();
    assert!(viewer.session().is_some_and(|s| s.last_error().is_none()));
}

#[test]
fn test_reset_zoom_clears_error() {
    let (mut viewer, _) = viewer();
    viewer.open(gallery(&["x.png"]), None);
    viewer.zoom_in();
    viewer.image_load_failed("x.png");

    assert_eq!(viewer.reset_zoom(), ViewerOutcome::Updated);
    assert!(zoom(&viewer).is_fit());
    assert!(viewer.session().is_some_and(|s| s.last_error().is_none()));

    // At fit already, reset still clears a fresh error
    viewer.image_load_failed("x.png");
    assert_eq!(viewer.reset_zoom(), ViewerOutcome::Updated);
    assert!(viewer.session().is_some_and(|s| s.last_error().is_none()));
}

#[test]
fn test_keys_drive_viewer() {
    let (mut viewer, _) = viewer();
    assert_eq!(viewer.handle_key("Escape"), None);

    viewer.open(gallery(&["a.png", "b.png"]), None);
    assert_eq!(viewer.handle_key("ArrowRight"), Some(ViewerOutcome::Updated));
    assert_eq!(index(&viewer), 1);
    assert_eq!(viewer.handle_key("+"), Some(ViewerOutcome::Updated));
    assert_eq!(viewer.handle_key("0"), Some(ViewerOutcome::Updated));
    assert_eq!(viewer.handle_key("q"), None);
    assert_eq!(viewer.handle_key("Escape"), Some(ViewerOutcome::Closed));
    assert!(!viewer.is_open());
}

#[test]
fn test_scroll_released_on_close_and_drop() {
    let (mut viewer, surface) = viewer();
    viewer.open(gallery(&["a.png"]), None);
    viewer.open(gallery(&["b.png"]), None);
    assert_eq!(surface.locks(), 1);
    assert_eq!(surface.unlocks(), 0);

    viewer.close();
    assert_eq!(surface.unlocks(), 1);

    viewer.open(gallery(&["a.png"]), None);
    assert_eq!(surface.locks(), 2);
    drop(viewer);
    assert_eq!(surface.unlocks(), 2);
}

#[test]
fn test_stacked_overlays_share_one_lock() {
    let surface = CountingSurface::default();
    let locker = ScrollLocker::new(surface.clone());

    let dialog = locker.acquire();
    let mut viewer = MediaViewer::new(locker.clone());
    viewer.open(gallery(&["a.png"]), None);
    assert_eq!(locker.holders(), 2);

    viewer.close();
    assert!(locker.is_locked());
    drop(dialog);
    assert!(!locker.is_locked());
    assert_eq!(surface.locks(), 1);
    assert_eq!(surface.unlocks(), 1);
}

#[test]
fn test_bundled_content_parses() {
    let portfolio = Portfolio::bundled().expect("bundled content is valid");
    assert!(!portfolio.projects.is_empty());
    assert!(portfolio.projects.iter().any(|p| p.has_screenshots()));
}

//! Display geometry for the media viewer.
//!
//! Pure function of zoom and fullscreen: at fit zoom the image is contained
//! in the bounding box with its aspect ratio preserved; any other zoom scales
//! the width and lets the viewport scroll.

use crate::config::viewer;
use crate::core::viewer::ZoomLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayScale {
    zoom: ZoomLevel,
    fullscreen: bool,
}

impl DisplayScale {
    pub fn new(zoom: ZoomLevel, fullscreen: bool) -> Self {
        Self { zoom, fullscreen }
    }

    /// Image is fitted to the bounding box.
    pub fn is_fit(&self) -> bool {
        self.zoom.is_fit()
    }

    /// Viewport scrolls instead of clipping.
    pub fn is_scrollable(&self) -> bool {
        !self.is_fit()
    }

    /// Bounding box `(max-width, max-height)` applied at fit zoom.
    pub fn bounds(&self) -> (&'static str, &'static str) {
        if self.fullscreen {
            (viewer::FULLSCREEN_MAX_WIDTH, viewer::FULLSCREEN_MAX_HEIGHT)
        } else {
            (viewer::WINDOWED_MAX_WIDTH, viewer::WINDOWED_MAX_HEIGHT)
        }
    }

    pub fn viewport_height(&self) -> &'static str {
        if self.fullscreen {
            viewer::FULLSCREEN_VIEWPORT_HEIGHT
        } else {
            viewer::WINDOWED_VIEWPORT_HEIGHT
        }
    }

    /// Inline style for the viewport container.
    pub fn viewport_style(&self) -> String {
        let height = self.viewport_height();
        format!("height: {height}; max-height: {height};")
    }

    /// Inline style for the `<img>` element.
    pub fn image_style(&self) -> String {
        if self.is_fit() {
            let (max_width, max_height) = self.bounds();
            format!(
                "max-width: {max_width}; max-height: {max_height}; width: auto; height: auto; object-fit: contain;"
            )
        } else {
            format!(
                "max-width: none; max-height: none; width: {}%; height: auto; object-fit: contain;",
                self.zoom.percent()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_windowed() {
        let scale = DisplayScale::new(ZoomLevel::FIT, false);
        assert!(scale.is_fit());
        assert!(!scale.is_scrollable());
        let style = scale.image_style();
        assert!(style.contains("max-width: calc(100vw - 4rem)"));
        assert!(style.contains("max-height: calc(90vh - 120px)"));
        assert!(style.contains("width: auto"));
    }

    #[test]
    fn test_fit_fullscreen_uses_larger_box() {
        let scale = DisplayScale::new(ZoomLevel::FIT, true);
        assert_eq!(
            scale.bounds(),
            ("calc(100vw - 2rem)", "calc(100vh - 120px)")
        );
        assert_eq!(scale.viewport_height(), "calc(100vh - 80px)");
    }

    #[test]
    fn test_zoomed_scales_width_and_scrolls() {
        let zoom = ZoomLevel::FIT.step_in().step_in();
        let scale = DisplayScale::new(zoom, false);
        assert!(scale.is_scrollable());
        let style = scale.image_style();
        assert!(style.contains("width: 150%"));
        assert!(style.contains("max-width: none"));
    }

    #[test]
    fn test_zoomed_out_also_scrolls() {
        let scale = DisplayScale::new(ZoomLevel::MIN, true);
        assert!(scale.is_scrollable());
        assert!(scale.image_style().contains("width: 50%"));
    }

    #[test]
    fn test_viewport_style() {
        let scale = DisplayScale::new(ZoomLevel::FIT, false);
        assert_eq!(
            scale.viewport_style(),
            "height: calc(90vh - 80px); max-height: calc(90vh - 80px);"
        );
    }
}

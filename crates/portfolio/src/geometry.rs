/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Converts a viewport-relative box (as reported by `getBoundingClientRect`)
    /// into document space.
    pub fn from_viewport(top: f64, bottom: f64, scroll_y: f64) -> Self {
        Self::new(top + scroll_y, bottom + scroll_y)
    }

    /// Inclusive on both edges.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}

/// Scroll state of the page at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `document.documentElement.scrollTop`
    pub scroll_top: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// `document.documentElement.scrollHeight`
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, viewport_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            scroll_height,
        }
    }

    /// Document-space y of the vertical centre of the viewport.
    pub fn midpoint(&self) -> f64 {
        self.scroll_top + self.viewport_height / 2.0
    }
}

//! Viewport visibility tracking.
//!
//! The host reports how much of an element intersects the viewport; the tracker
//! turns that into a boolean [`Signal`]. Observation starts on mount and is released
//! on unmount or drop.

use crate::signal::Signal;
use crate::subscription::Subscription;

/// Fraction of an element that must be on screen before it counts as visible.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Host capability for viewport intersection observation.
pub trait ViewportObserver {
    /// Whatever the host uses to identify an element.
    type Target: ?Sized;

    /// Starts observing `target`. `on_change` receives an [`Intersection`] each
    /// time the host sees the ratio cross `threshold` or the element enter or
    /// leave the viewport. Dropping the returned subscription must stop all
    /// further callbacks.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: f32,
        on_change: Box<dyn FnMut(Intersection) + 'static>,
    ) -> Subscription;
}

/// One intersection report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Fraction of the element inside the viewport, `0.0..=1.0`.
    pub ratio: f32,
    /// Largest ratio the element can reach in the current viewport. Below 1.0
    /// for elements taller than the viewport.
    pub max_ratio: f32,
}

impl Intersection {
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio,
            max_ratio: 1.0,
        }
    }

    pub fn with_max_ratio(mut self, max_ratio: f32) -> Self {
        self.max_ratio = max_ratio;
        self
    }

    /// [`is_visible`] against `threshold`, or any overlap when the element is
    /// too tall to ever reach it.
    pub fn is_visible(&self, threshold: f32) -> bool {
        if self.max_ratio < threshold {
            is_visible(self.ratio, 0.0)
        } else {
            is_visible(self.ratio, threshold)
        }
    }
}

/// Visibility rule: at or above the threshold, or any overlap for a zero threshold.
pub fn is_visible(ratio: f32, threshold: f32) -> bool {
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

/// Tracks whether one element is on screen.
#[derive(Debug)]
pub struct VisibilityTracker {
    threshold: f32,
    visible: Signal<bool>,
    observation: Option<Subscription>,
}

impl VisibilityTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: Signal::new(false),
            observation: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Starts observing `target`, replacing any previous observation. A missing
    /// target leaves the tracker unmounted.
    pub fn mount<O>(&mut self, observer: &O, target: Option<&O::Target>)
    where
        O: ViewportObserver + ?Sized,
    {
        self.unmount();
        let Some(target) = target else {
            tracing::trace!("visibility target missing, not observing");
            return;
        };

        let visible = self.visible.clone();
        let threshold = self.threshold;
        let subscription = observer.observe(
            target,
            threshold,
            Box::new(move |intersection: Intersection| {
                visible.set(intersection.is_visible(threshold));
            }),
        );
        self.observation = Some(subscription);
    }

    /// Stops observing. The last reported visibility is kept.
    pub fn unmount(&mut self) {
        if let Some(observation) = self.observation.take() {
            observation.unsubscribe();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.observation.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn visible(&self) -> Signal<bool> {
        self.visible.clone()
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualViewport;

    #[test]
    fn threshold_rule() {
        assert!(!is_visible(0.0, 0.1));
        assert!(!is_visible(0.09, 0.1));
        assert!(is_visible(0.1, 0.1));
        assert!(is_visible(1.0, 0.1));
        assert!(!is_visible(0.0, 0.0));
        assert!(is_visible(0.01, 0.0));
    }

    #[test]
    fn unreachable_threshold_falls_back_to_any_overlap() {
        // Twenty viewports tall: at most 5% of it can ever be on screen.
        let tall = Intersection::new(0.01).with_max_ratio(0.05);
        assert!(tall.is_visible(0.1));
        assert!(!Intersection::new(0.0).with_max_ratio(0.05).is_visible(0.1));

        let short = Intersection::new(0.01).with_max_ratio(0.5);
        assert!(!short.is_visible(0.1));
    }

    #[test]
    fn tall_element_is_revealed_once_it_overlaps() {
        let viewport = ManualViewport::new();
        let mut tracker = VisibilityTracker::default();
        tracker.mount(&viewport, Some("projects"));

        viewport.report_intersection("projects", Intersection::new(0.02).with_max_ratio(0.05));
        assert!(tracker.is_visible());
        viewport.report_intersection("projects", Intersection::new(0.0).with_max_ratio(0.05));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn becomes_visible_and_flips_back() {
        let viewport = ManualViewport::new();
        let mut tracker = VisibilityTracker::default();
        tracker.mount(&viewport, Some("about"));

        assert!(!tracker.is_visible());
        viewport.report("about", 0.5);
        assert!(tracker.is_visible());
        viewport.report("about", 0.0);
        assert!(!tracker.is_visible());
        viewport.report("about", 0.2);
        assert!(tracker.is_visible());
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let viewport = ManualViewport::new();
        let mut tracker = VisibilityTracker::default();
        tracker.mount(&viewport, None);

        assert!(!tracker.is_mounted());
        assert_eq!(viewport.observer_count(), 0);
        tracker.unmount();
    }

    #[test]
    fn unmount_releases_observer() {
        let viewport = ManualViewport::new();
        let mut tracker = VisibilityTracker::default();
        tracker.mount(&viewport, Some("hero"));
        assert_eq!(viewport.observer_count(), 1);

        tracker.unmount();
        assert_eq!(viewport.observer_count(), 0);
        viewport.report("hero", 1.0);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn drop_releases_observer() {
        let viewport = ManualViewport::new();
        {
            let mut tracker = VisibilityTracker::default();
            tracker.mount(&viewport, Some("hero"));
            assert_eq!(viewport.observer_count(), 1);
        }
        assert_eq!(viewport.observer_count(), 0);
    }

    #[test]
    fn remount_replaces_previous_observation() {
        let viewport = ManualViewport::new();
        let mut tracker = VisibilityTracker::new(0.5);
        tracker.mount(&viewport, Some("a"));
        tracker.mount(&viewport, Some("b"));

        assert_eq!(viewport.observer_count(), 1);
        assert_eq!(viewport.threshold_for("b"), Some(0.5));
        viewport.report("a", 1.0);
        assert!(!tracker.is_visible());
        viewport.report("b", 0.6);
        assert!(tracker.is_visible());
    }
}

//! Scroll position tracking.
//!
//! One scroll listener drives three signals: whether the page is scrolled past
//! the hero (shows the nav bar), whether it is near the bottom (shows the
//! scroll-to-top control), and which section holds the viewport midpoint.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::config::ScrollConfig;
use crate::geometry::{ScrollMetrics, Span};
use crate::signal::Signal;
use crate::subscription::Subscription;

/// The four addressable regions of the page, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
    ];

    /// Element id of the section's anchor.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section `{}`", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Read access to the live page layout.
pub trait PageProbe {
    /// Current scroll metrics, or `None` if the document is gone.
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Document-space extent of a section, or `None` if its element is missing.
    fn section_span(&self, section: SectionId) -> Option<Span>;
}

/// Host capability for scroll notifications.
pub trait ScrollEvents {
    /// Calls `listener` on every scroll event until the subscription is dropped.
    fn on_scroll(&self, listener: Box<dyn FnMut() + 'static>) -> Subscription;
}

/// Host capability for programmatic smooth scrolling.
pub trait Navigator {
    fn scroll_to(&self, top: f64);
}

impl<P: PageProbe + ?Sized> PageProbe for Rc<P> {
    fn metrics(&self) -> Option<ScrollMetrics> {
        (**self).metrics()
    }

    fn section_span(&self, section: SectionId) -> Option<Span> {
        (**self).section_span(section)
    }
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn scroll_to(&self, top: f64) {
        (**self).scroll_to(top)
    }
}

/// `scrollTop > innerHeight - margin`, strictly.
pub fn past_hero(metrics: &ScrollMetrics, margin: f64) -> bool {
    metrics.scroll_top > metrics.viewport_height - margin
}

/// `scrollTop > scrollHeight - innerHeight - margin`, strictly.
pub fn near_bottom(metrics: &ScrollMetrics, margin: f64) -> bool {
    metrics.scroll_top > metrics.scroll_height - metrics.viewport_height - margin
}

/// First section, in document order, whose extent contains `y`.
pub fn section_at(y: f64, span_of: impl Fn(SectionId) -> Option<Span>) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|&section| span_of(section).is_some_and(|span| span.contains(y)))
}

/// Scroll offset that brings `section` to the top of the viewport, below the
/// fixed header. `None` if the section element is missing.
pub fn section_target<P: PageProbe + ?Sized>(
    probe: &P,
    section: SectionId,
    header_offset: f64,
) -> Option<f64> {
    probe
        .section_span(section)
        .map(|span| span.top - header_offset)
}

/// Smooth-scrolls to `section`. Missing sections are ignored.
pub fn navigate_to<P, N>(probe: &P, navigator: &N, section: SectionId, config: &ScrollConfig)
where
    P: PageProbe + ?Sized,
    N: Navigator + ?Sized,
{
    match section_target(probe, section, config.header_offset) {
        Some(top) => {
            tracing::debug!(%section, top, "navigating to section");
            navigator.scroll_to(top);
        }
        None => tracing::trace!(%section, "section element missing, ignoring navigation"),
    }
}

pub fn scroll_to_top<N: Navigator + ?Sized>(navigator: &N) {
    navigator.scroll_to(0.0);
}

/// Derived scroll state for the whole page.
#[derive(Debug)]
pub struct ScrollTracker {
    config: ScrollConfig,
    past_hero: Signal<bool>,
    near_bottom: Signal<bool>,
    active: Signal<SectionId>,
    listener: Option<Subscription>,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            past_hero: Signal::new(false),
            near_bottom: Signal::new(false),
            active: Signal::new(SectionId::default()),
            listener: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Recomputes all three signals from one observation. The active section only
    /// changes when some section contains the viewport midpoint.
    pub fn update(&self, metrics: ScrollMetrics, span_of: impl Fn(SectionId) -> Option<Span>) {
        Self::apply(
            &self.config,
            &self.past_hero,
            &self.near_bottom,
            &self.active,
            metrics,
            span_of,
        );
    }

    /// [`update`](Self::update) from a live probe. A probe without metrics is a no-op.
    pub fn refresh<P: PageProbe + ?Sized>(&self, probe: &P) {
        if let Some(metrics) = probe.metrics() {
            self.update(metrics, |section| probe.section_span(section));
        }
    }

    /// Subscribes to `events`, recomputing from `probe` on every scroll, and takes
    /// one reading immediately. Replaces any previous attachment.
    pub fn attach<E, P>(&mut self, events: &E, probe: Rc<P>)
    where
        E: ScrollEvents + ?Sized,
        P: PageProbe + ?Sized + 'static,
    {
        self.detach();
        self.refresh(&*probe);

        let config = self.config.clone();
        let past_hero = self.past_hero.clone();
        let near_bottom = self.near_bottom.clone();
        let active = self.active.clone();
        let listener = events.on_scroll(Box::new(move || {
            let Some(metrics) = probe.metrics() else {
                return;
            };
            Self::apply(
                &config,
                &past_hero,
                &near_bottom,
                &active,
                metrics,
                |section| probe.section_span(section),
            );
        }));
        tracing::debug!("scroll tracker attached");
        self.listener = Some(listener);
    }

    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.unsubscribe();
            tracing::debug!("scroll tracker detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn past_hero(&self) -> Signal<bool> {
        self.past_hero.clone()
    }

    pub fn near_bottom(&self) -> Signal<bool> {
        self.near_bottom.clone()
    }

    pub fn active_section(&self) -> Signal<SectionId> {
        self.active.clone()
    }

    fn apply(
        config: &ScrollConfig,
        past_hero_signal: &Signal<bool>,
        near_bottom_signal: &Signal<bool>,
        active: &Signal<SectionId>,
        metrics: ScrollMetrics,
        span_of: impl Fn(SectionId) -> Option<Span>,
    ) {
        past_hero_signal.set(past_hero(&metrics, config.hero_margin));
        near_bottom_signal.set(near_bottom(&metrics, config.bottom_margin));
        if let Some(section) = section_at(metrics.midpoint(), span_of) {
            if active.set(section) {
                tracing::debug!(%section, "active section changed");
            }
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

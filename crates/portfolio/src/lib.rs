//! Portfolio page behaviour.
//!
//! Host-independent state for the single-page portfolio site: which section is
//! in view, whether the nav bar and scroll-to-top control are shown, fade-in
//! reveals, the typing effect in the hero, and the selected experience.
//!
//! Hosts supply three capabilities:
//! - [`ViewportObserver`] for intersection observation,
//! - [`ScrollEvents`], [`PageProbe`] and [`Navigator`] for scrolling,
//! - [`Scheduler`] for repeating timers.
//!
//! Every registration returns a [`Subscription`] or [`TaskHandle`] that releases
//! the host resource when dropped.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use portfolio::testing::ManualScheduler;
//! use portfolio::{TypewriterConfig, TypewriterText};
//!
//! let scheduler = ManualScheduler::new();
//! let mut name = TypewriterText::new(TypewriterConfig::default());
//! name.mount(&scheduler, "kate liu");
//!
//! scheduler.advance(Duration::from_millis(400));
//! assert_eq!(name.text().get(), "kate");
//! ```

mod config;
mod content;
mod error;
mod geometry;
mod page;
mod reveal;
mod schedule;
mod scroll;
mod selection;
mod signal;
mod subscription;
mod typewriter;
mod visibility;

pub mod testing;

pub use config::{PortfolioConfig, RevealConfig, ScrollConfig, TypewriterConfig};
pub use content::{Content, Experience, LinkKind, Profile, ProfileLink, Project};
pub use error::{Error, Result};
pub use geometry::{ScrollMetrics, Span};
pub use page::{NavItem, PageReveals, footer_text, nav_items};
pub use reveal::{Reveal, RevealAxis, RevealFrame, RevealTransition};
pub use schedule::{RepeatingTask, Scheduler, TaskHandle, Tick};
pub use scroll::{
    Navigator, PageProbe, ScrollEvents, ScrollTracker, SectionId, UnknownSection, navigate_to,
    near_bottom, past_hero, scroll_to_top, section_at, section_target,
};
pub use selection::{ExperienceIndex, ExperienceSelector};
pub use signal::Signal;
pub use subscription::Subscription;
pub use typewriter::{Typewriter, TypewriterText};
pub use visibility::{
    DEFAULT_THRESHOLD, Intersection, ViewportObserver, VisibilityTracker, is_visible,
};

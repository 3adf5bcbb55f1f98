mod about;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod scroll_top;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use portfolio::{
    Content, ExperienceSelector, PageReveals, PortfolioConfig, Reveal, ScrollTracker,
    Subscription, TypewriterText, VisibilityTracker,
};

use crate::dom::{DomListener, el, reveal_style};
use crate::host::{BrowserPage, BrowserViewport, IntervalScheduler};

pub(crate) use about::build_about;
pub(crate) use experience::build_experience;
pub(crate) use footer::build_footer;
pub(crate) use hero::build_hero;
pub(crate) use nav::build_nav;
pub(crate) use projects::build_projects;
pub(crate) use scroll_top::build_scroll_top;

/// Everything a mounted view holds on to. Dropping it tears the view down.
#[derive(Default)]
pub(crate) struct Mounted {
    pub(crate) listeners: Vec<DomListener>,
    pub(crate) subscriptions: Vec<Subscription>,
    pub(crate) trackers: Vec<VisibilityTracker>,
    pub(crate) typewriters: Vec<TypewriterText>,
    pub(crate) selectors: Vec<ExperienceSelector>,
}

impl Mounted {
    /// Releases observers and timers before the listeners that may reference them.
    pub(crate) fn teardown(&mut self) {
        for tracker in &mut self.trackers {
            tracker.unmount();
        }
        for typewriter in &mut self.typewriters {
            typewriter.unmount();
        }
        self.subscriptions.clear();
        self.listeners.clear();
        self.trackers.clear();
        self.typewriters.clear();
        self.selectors.clear();
    }
}

pub(crate) struct ViewContext<'a> {
    pub(crate) document: &'a Document,
    pub(crate) content: &'a Rc<Content>,
    pub(crate) config: &'a PortfolioConfig,
    pub(crate) reveals: &'a PageReveals,
    pub(crate) page: &'a Rc<BrowserPage>,
    pub(crate) viewport: &'a BrowserViewport,
    pub(crate) scheduler: &'a IntervalScheduler,
    pub(crate) scroll: &'a ScrollTracker,
    pub(crate) mounted: &'a mut Mounted,
}

impl ViewContext<'_> {
    /// Wraps `child` in a block that fades in when it scrolls into view.
    pub(crate) fn fade_in(
        &mut self,
        class: &str,
        reveal: Reveal,
        child: &Element,
    ) -> Result<Element, JsValue> {
        let class = format!("fade-in {class}");
        let wrapper = el(self.document, "div", class.trim_end())?;
        wrapper.append_child(child)?;

        let reveal_config = self.config.reveal.clone();
        let transition = reveal.transition(&reveal_config);
        wrapper.set_attribute(
            "style",
            &reveal_style(reveal.frame(false, &reveal_config), transition),
        )?;

        let mut tracker = VisibilityTracker::new(reveal_config.threshold);
        tracker.mount(self.viewport, Some(&wrapper));

        let subscription = {
            let wrapper = wrapper.clone();
            tracker.visible().subscribe(move |&visible| {
                let style = reveal_style(reveal.frame(visible, &reveal_config), transition);
                let _ = wrapper.set_attribute("style", &style);
            })
        };

        self.mounted.trackers.push(tracker);
        self.mounted.subscriptions.push(subscription);
        Ok(wrapper)
    }
}

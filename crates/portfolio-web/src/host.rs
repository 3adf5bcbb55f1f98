//! Browser implementations of the page capabilities.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, Window,
};

use portfolio::{
    Intersection, Navigator, PageProbe, RepeatingTask, Scheduler, ScrollEvents, ScrollMetrics,
    SectionId, Span, Subscription, TaskHandle, Tick, ViewportObserver,
};

use crate::dom::DomListener;

/// The live document: scroll metrics, section geometry, scroll events and
/// smooth scrolling.
pub(crate) struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub(crate) fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl PageProbe for BrowserPage {
    fn metrics(&self) -> Option<ScrollMetrics> {
        let root = self.document.document_element()?;
        let viewport_height = self.window.inner_height().ok()?.as_f64()?;
        Some(ScrollMetrics::new(
            f64::from(root.scroll_top()),
            viewport_height,
            f64::from(root.scroll_height()),
        ))
    }

    fn section_span(&self, section: SectionId) -> Option<Span> {
        let element = self.document.get_element_by_id(section.as_str())?;
        let rect = element.get_bounding_client_rect();
        let scroll_y = self.window.scroll_y().ok()?;
        Some(Span::from_viewport(rect.top(), rect.bottom(), scroll_y))
    }
}

impl ScrollEvents for BrowserPage {
    fn on_scroll(&self, listener: Box<dyn FnMut() + 'static>) -> Subscription {
        match DomListener::new(&self.window, "scroll", listener) {
            Ok(listener) => Subscription::new(move || drop(listener)),
            Err(err) => {
                tracing::warn!(?err, "failed to add scroll listener");
                Subscription::empty()
            }
        }
    }
}

impl Navigator for BrowserPage {
    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_with_scroll_to_options(&options);
    }
}

/// `IntersectionObserver`, one per observed element.
pub(crate) struct BrowserViewport;

impl ViewportObserver for BrowserViewport {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        threshold: f32,
        mut on_change: Box<dyn FnMut(Intersection) + 'static>,
    ) -> Subscription {
        let closure = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(
                        Intersection::new(entry.intersection_ratio() as f32)
                            .with_max_ratio(max_ratio(&entry)),
                    );
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(f64::from(threshold)));
        let observer =
            match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!(?err, "failed to create intersection observer");
                    return Subscription::empty();
                }
            };
        observer.observe(target);

        let target = target.clone();
        Subscription::new(move || {
            observer.unobserve(&target);
            observer.disconnect();
            drop(closure);
        })
    }
}

/// Share of the target that fits in the root at once.
fn max_ratio(entry: &IntersectionObserverEntry) -> f32 {
    let height = entry.bounding_client_rect().height();
    match entry.root_bounds() {
        Some(root) if height > 0.0 => (root.height() / height).min(1.0) as f32,
        _ => 1.0,
    }
}

/// `setInterval` timers.
pub(crate) struct IntervalScheduler {
    window: Window,
}

impl IntervalScheduler {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration, mut task: RepeatingTask) -> TaskHandle {
        let running = Rc::new(Cell::new(true));
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let closure = Closure::<dyn FnMut()>::new({
            let running = running.clone();
            let interval_id = interval_id.clone();
            let window = self.window.clone();
            move || {
                if !running.get() {
                    return;
                }
                if task() == Tick::Stop {
                    running.set(false);
                    if let Some(id) = interval_id.take() {
                        window.clear_interval_with_handle(id);
                    }
                }
            }
        });

        let timeout = i32::try_from(period.as_millis()).unwrap_or(i32::MAX).max(1);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(id) => interval_id.set(Some(id)),
            Err(err) => {
                tracing::warn!(?err, "failed to start interval");
                running.set(false);
            }
        }

        let window = self.window.clone();
        TaskHandle::new(
            running,
            Subscription::new(move || {
                if let Some(id) = interval_id.take() {
                    window.clear_interval_with_handle(id);
                }
                drop(closure);
            }),
        )
    }
}

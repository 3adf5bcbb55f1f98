//! Deterministic hosts for exercising page behaviour without a browser.
//!
//! - [`ManualScheduler`] runs repeating tasks against a virtual clock.
//! - [`ManualViewport`] reports intersection ratios on demand.
//! - [`ManualPage`] is a scriptable page: scroll metrics, section spans, scroll
//!   events and recorded navigation requests.
//!
//! Each double counts its live registrations so tests can assert that teardown
//! released everything.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::geometry::{ScrollMetrics, Span};
use crate::schedule::{RepeatingTask, Scheduler, TaskHandle, Tick};
use crate::scroll::{Navigator, PageProbe, ScrollEvents, SectionId};
use crate::subscription::Subscription;
use crate::visibility::{Intersection, ViewportObserver};

struct ManualTask {
    id: u64,
    period: Duration,
    due: Duration,
    task: Option<RepeatingTask>,
    running: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    tasks: Vec<ManualTask>,
    next_id: u64,
}

/// Scheduler driven by [`advance`](Self::advance).
#[derive(Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks still scheduled.
    pub fn active_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Moves the clock forward, running every task that falls due in deadline
    /// order. Ties run in registration order.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;

        loop {
            let next = {
                let state = self.state.borrow();
                state
                    .tasks
                    .iter()
                    .filter(|task| task.task.is_some() && task.due <= target)
                    .min_by_key(|task| (task.due, task.id))
                    .map(|task| task.id)
            };
            let Some(id) = next else {
                break;
            };

            let mut task = {
                let mut state = self.state.borrow_mut();
                let Some(entry) = state.tasks.iter_mut().find(|task| task.id == id) else {
                    continue;
                };
                let due = entry.due;
                let task = entry.task.take();
                state.now = due;
                match task {
                    Some(task) => task,
                    None => continue,
                }
            };

            let tick = task();

            let finished = {
                let mut state = self.state.borrow_mut();
                match state.tasks.iter().position(|entry| entry.id == id) {
                    // Cancelled from inside its own tick.
                    None => Some(task),
                    Some(pos) => match tick {
                        Tick::Stop => {
                            let entry = state.tasks.remove(pos);
                            entry.running.set(false);
                            Some(task)
                        }
                        Tick::Continue => {
                            let entry = &mut state.tasks[pos];
                            entry.due += entry.period;
                            entry.task = Some(task);
                            None
                        }
                    },
                }
            };
            drop(finished);
        }

        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, task: RepeatingTask) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        let running = Rc::new(Cell::new(true));
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + period;
            state.tasks.push(ManualTask {
                id,
                period,
                due,
                task: Some(task),
                running: running.clone(),
            });
            id
        };

        let weak = Rc::downgrade(&self.state);
        TaskHandle::new(
            running,
            Subscription::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let removed: Vec<ManualTask> = {
                    let mut state = state.borrow_mut();
                    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.tasks)
                        .into_iter()
                        .partition(|task| task.id == id);
                    state.tasks = kept;
                    removed
                };
                drop(removed);
            }),
        )
    }
}

type IntersectionCallback = Box<dyn FnMut(Intersection) + 'static>;

struct Observation {
    id: u64,
    target: String,
    threshold: f32,
    callback: Option<IntersectionCallback>,
}

/// Viewport whose intersections are reported by the test.
#[derive(Default)]
pub struct ManualViewport {
    observations: Rc<RefCell<Vec<Observation>>>,
    next_id: Cell<u64>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `ratio` to every observer of `target`, for an element that fits
    /// in the viewport.
    pub fn report(&self, target: &str, ratio: f32) {
        self.report_intersection(target, Intersection::new(ratio));
    }

    pub fn report_intersection(&self, target: &str, intersection: Intersection) {
        let ids: Vec<u64> = self
            .observations
            .borrow()
            .iter()
            .filter(|observation| observation.target == target)
            .map(|observation| observation.id)
            .collect();

        for id in ids {
            let callback = self
                .observations
                .borrow_mut()
                .iter_mut()
                .find(|observation| observation.id == id)
                .and_then(|observation| observation.callback.take());
            let Some(mut callback) = callback else {
                continue;
            };
            callback(intersection);
            if let Some(observation) = self
                .observations
                .borrow_mut()
                .iter_mut()
                .find(|observation| observation.id == id)
            {
                observation.callback = Some(callback);
            }
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observations.borrow().len()
    }

    /// Threshold requested by the first observer of `target`.
    pub fn threshold_for(&self, target: &str) -> Option<f32> {
        self.observations
            .borrow()
            .iter()
            .find(|observation| observation.target == target)
            .map(|observation| observation.threshold)
    }
}

impl ViewportObserver for ManualViewport {
    type Target = str;

    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_change: Box<dyn FnMut(Intersection) + 'static>,
    ) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.observations.borrow_mut().push(Observation {
            id,
            target: target.to_string(),
            threshold,
            callback: Some(on_change),
        });

        let weak = Rc::downgrade(&self.observations);
        Subscription::new(move || {
            if let Some(observations) = weak.upgrade() {
                let removed: Vec<Observation> = {
                    let mut observations = observations.borrow_mut();
                    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut *observations)
                        .into_iter()
                        .partition(|observation| observation.id == id);
                    *observations = kept;
                    removed
                };
                drop(removed);
            }
        })
    }
}

type ScrollListener = Box<dyn FnMut() + 'static>;

/// Scriptable page layout and scroll source.
pub struct ManualPage {
    metrics: Cell<Option<ScrollMetrics>>,
    spans: RefCell<HashMap<SectionId, Span>>,
    listeners: Rc<RefCell<Vec<(u64, Option<ScrollListener>)>>>,
    next_id: Cell<u64>,
    requests: RefCell<Vec<f64>>,
}

impl ManualPage {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics: Cell::new(Some(metrics)),
            spans: RefCell::new(HashMap::new()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn set_span(&self, section: SectionId, span: Span) {
        self.spans.borrow_mut().insert(section, span);
    }

    pub fn remove_span(&self, section: SectionId) {
        self.spans.borrow_mut().remove(&section);
    }

    /// Simulates the document going away; probes return `None` afterwards.
    pub fn clear_metrics(&self) {
        self.metrics.set(None);
    }

    /// Moves the page and fires a scroll event.
    pub fn scroll_to_offset(&self, scroll_top: f64) {
        if let Some(mut metrics) = self.metrics.get() {
            metrics.scroll_top = scroll_top;
            self.metrics.set(Some(metrics));
        }
        self.fire_scroll();
    }

    pub fn fire_scroll(&self) {
        let ids: Vec<u64> = self.listeners.borrow().iter().map(|(id, _)| *id).collect();
        for id in ids {
            let listener = self
                .listeners
                .borrow_mut()
                .iter_mut()
                .find(|(listener_id, _)| *listener_id == id)
                .and_then(|(_, listener)| listener.take());
            let Some(mut listener) = listener else {
                continue;
            };
            listener();
            if let Some((_, slot)) = self
                .listeners
                .borrow_mut()
                .iter_mut()
                .find(|(listener_id, _)| *listener_id == id)
            {
                *slot = Some(listener);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Offsets passed to [`Navigator::scroll_to`], oldest first.
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.requests.borrow().clone()
    }
}

impl PageProbe for ManualPage {
    fn metrics(&self) -> Option<ScrollMetrics> {
        self.metrics.get()
    }

    fn section_span(&self, section: SectionId) -> Option<Span> {
        self.spans.borrow().get(&section).copied()
    }
}

impl ScrollEvents for ManualPage {
    fn on_scroll(&self, listener: Box<dyn FnMut() + 'static>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Some(listener)));

        let weak = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                let removed: Vec<(u64, Option<ScrollListener>)> = {
                    let mut listeners = listeners.borrow_mut();
                    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut *listeners)
                        .into_iter()
                        .partition(|(listener_id, _)| *listener_id == id);
                    *listeners = kept;
                    removed
                };
                drop(removed);
            }
        })
    }
}

impl Navigator for ManualPage {
    fn scroll_to(&self, top: f64) {
        self.requests.borrow_mut().push(top);
    }
}

//! Repeating task abstraction.
//!
//! Timers are explicit: a [`Scheduler`] runs a task at a fixed period and hands back
//! a [`TaskHandle`]. The task stops itself by returning [`Tick::Stop`]; the owner
//! stops it by cancelling or dropping the handle.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::subscription::Subscription;

/// What a repeating task wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub type RepeatingTask = Box<dyn FnMut() -> Tick + 'static>;

/// Host capability for fixed-interval timers.
pub trait Scheduler {
    /// Runs `task` every `period` until it returns [`Tick::Stop`] or the returned
    /// handle is cancelled. The first run happens one period from now.
    fn every(&self, period: Duration, task: RepeatingTask) -> TaskHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn every(&self, period: Duration, task: RepeatingTask) -> TaskHandle {
        (**self).every(period, task)
    }
}

/// Cancellation handle for a scheduled task. Dropping it cancels the task.
#[must_use]
pub struct TaskHandle {
    running: Rc<Cell<bool>>,
    cancel: Subscription,
}

impl TaskHandle {
    /// `running` is shared with the scheduler, which clears it when the task
    /// stops itself. `cancel` releases the host timer.
    pub fn new(running: Rc<Cell<bool>>, cancel: Subscription) -> Self {
        Self { running, cancel }
    }

    /// Whether the task is still scheduled.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.running.set(false);
        // `cancel` drops after this and releases the timer.
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("running", &self.running.get())
            .field("cancel", &self.cancel)
            .finish()
    }
}

//! Typing effect with a blinking cursor.
//!
//! [`Typewriter`] is the pure state machine: each tick reveals one more character
//! and the tick that reaches the end of the text is the last. [`TypewriterText`]
//! drives it from a [`Scheduler`] alongside an endless cursor blink.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TypewriterConfig;
use crate::schedule::{Scheduler, TaskHandle, Tick};
use crate::signal::Signal;

/// Character-by-character reveal of a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    source: String,
    len: usize,
    index: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let len = source.chars().count();
        Self {
            source,
            len,
            index: 0,
        }
    }

    /// Replaces the source and rewinds to the start.
    pub fn restart(&mut self, source: impl Into<String>) {
        *self = Self::new(source);
    }

    /// Reveals one more character. Returns [`Tick::Stop`] on the tick that
    /// reveals the last one, and on any tick after that.
    pub fn tick(&mut self) -> Tick {
        if self.index < self.len {
            self.index += 1;
        }
        if self.is_finished() {
            Tick::Stop
        } else {
            Tick::Continue
        }
    }

    /// The revealed prefix, cut on a character boundary.
    pub fn displayed(&self) -> &str {
        match self.source.char_indices().nth(self.index) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.len
    }
}

/// Typed text plus cursor, bound to host timers.
#[derive(Debug)]
pub struct TypewriterText {
    config: TypewriterConfig,
    state: Rc<RefCell<Typewriter>>,
    text: Signal<String>,
    cursor_visible: Signal<bool>,
    typing: Option<TaskHandle>,
    blink: Option<TaskHandle>,
}

impl TypewriterText {
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            state: Rc::new(RefCell::new(Typewriter::new(""))),
            text: Signal::new(String::new()),
            cursor_visible: Signal::new(true),
            typing: None,
            blink: None,
        }
    }

    /// Starts typing `source` from the beginning and (re)arms the cursor blink.
    /// Calling it again while mounted restarts with the new source.
    pub fn mount<S: Scheduler + ?Sized>(&mut self, scheduler: &S, source: &str) {
        self.unmount();

        self.state.borrow_mut().restart(source);
        self.text.set(String::new());
        tracing::debug!(source, "typewriter mounted");

        if !self.state.borrow().is_finished() {
            let state = self.state.clone();
            let text = self.text.clone();
            self.typing = Some(scheduler.every(
                self.config.tick(),
                Box::new(move || {
                    let mut state = state.borrow_mut();
                    let tick = state.tick();
                    text.set(state.displayed().to_string());
                    tracing::trace!(index = state.index(), "typewriter tick");
                    tick
                }),
            ));
        }

        let cursor_visible = self.cursor_visible.clone();
        self.blink = Some(scheduler.every(
            self.config.cursor_blink(),
            Box::new(move || {
                cursor_visible.set(!cursor_visible.get());
                Tick::Continue
            }),
        ));
    }

    /// Cancels both timers. The displayed text and cursor keep their last values.
    pub fn unmount(&mut self) {
        let was_mounted = self.typing.is_some() || self.blink.is_some();
        if let Some(typing) = self.typing.take() {
            typing.cancel();
        }
        if let Some(blink) = self.blink.take() {
            blink.cancel();
        }
        if was_mounted {
            tracing::debug!("typewriter unmounted");
        }
    }

    pub fn is_typing(&self) -> bool {
        self.typing.as_ref().is_some_and(TaskHandle::is_running)
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.as_ref().is_some_and(TaskHandle::is_running)
    }

    pub fn text(&self) -> Signal<String> {
        self.text.clone()
    }

    pub fn cursor_visible(&self) -> Signal<bool> {
        self.cursor_visible.clone()
    }
}

impl Default for TypewriterText {
    fn default() -> Self {
        Self::new(TypewriterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use std::time::Duration;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = Typewriter::new("kate liu");
        assert_eq!(typewriter.displayed(), "");

        for n in 1..=7 {
            assert_eq!(typewriter.tick(), Tick::Continue);
            assert_eq!(typewriter.displayed(), &"kate liu"[..n]);
        }
        assert_eq!(typewriter.tick(), Tick::Stop);
        assert_eq!(typewriter.displayed(), "kate liu");
        assert_eq!(typewriter.tick(), Tick::Stop);
        assert_eq!(typewriter.index(), 8);
    }

    #[test]
    fn cuts_on_character_boundaries() {
        let mut typewriter = Typewriter::new("zoë");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "zo");
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "zoë");
        assert!(typewriter.is_finished());
    }

    #[test]
    fn empty_source_is_finished_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.tick(), Tick::Stop);
        assert_eq!(typewriter.displayed(), "");
    }

    #[test]
    fn restart_rewinds() {
        let mut typewriter = Typewriter::new("abc");
        typewriter.tick();
        typewriter.restart("xyz");
        assert_eq!(typewriter.index(), 0);
        assert_eq!(typewriter.source(), "xyz");
    }

    #[test]
    fn text_stops_after_last_character() {
        let scheduler = ManualScheduler::new();
        let mut text = TypewriterText::default();
        text.mount(&scheduler, "kate liu");

        for n in 1..=8 {
            scheduler.advance(Duration::from_millis(100));
            assert_eq!(text.text().get(), &"kate liu"[..n]);
        }
        assert!(!text.is_typing());
        assert!(text.is_blinking());
        assert_eq!(scheduler.active_tasks(), 1);
    }

    #[test]
    fn cursor_blinks_every_530ms() {
        let scheduler = ManualScheduler::new();
        let mut text = TypewriterText::default();
        text.mount(&scheduler, "hi");

        assert!(text.cursor_visible().get());
        scheduler.advance(Duration::from_millis(529));
        assert!(text.cursor_visible().get());
        scheduler.advance(Duration::from_millis(1));
        assert!(!text.cursor_visible().get());
        scheduler.advance(Duration::from_millis(530));
        assert!(text.cursor_visible().get());
    }

    #[test]
    fn unmount_cancels_both_timers() {
        let scheduler = ManualScheduler::new();
        let mut text = TypewriterText::default();
        text.mount(&scheduler, "kate liu");
        scheduler.advance(Duration::from_millis(300));

        text.unmount();
        assert_eq!(scheduler.active_tasks(), 0);
        scheduler.advance(Duration::from_secs(5));
        assert_eq!(text.text().get(), "kat");
    }

    #[test]
    fn remount_resets_the_counter() {
        let scheduler = ManualScheduler::new();
        let mut text = TypewriterText::default();
        text.mount(&scheduler, "kate liu");
        scheduler.advance(Duration::from_millis(500));

        text.mount(&scheduler, "ok");
        assert_eq!(text.text().get(), "");
        assert_eq!(scheduler.active_tasks(), 2);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(text.text().get(), "o");
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(text.text().get(), "ok");
        assert!(!text.is_typing());
    }

    #[test]
    fn drop_cancels_timers() {
        let scheduler = ManualScheduler::new();
        {
            let mut text = TypewriterText::default();
            text.mount(&scheduler, "kate liu");
            assert_eq!(scheduler.active_tasks(), 2);
        }
        assert_eq!(scheduler.active_tasks(), 0);
    }
}

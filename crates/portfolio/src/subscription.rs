//! Release handles for host callbacks and signal observers.
//!
//! A [`Subscription`] owns one teardown closure and runs it when dropped, so an
//! observer, listener or timer lives exactly as long as its handle.

/// Runs its release closure on drop.
#[must_use]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + 'static>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Holds nothing. Returned when a host had nothing to attach to.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases now rather than at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(count: &Rc<Cell<u32>>) -> Subscription {
        let count = count.clone();
        Subscription::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn drop_releases() {
        let count = Rc::new(Cell::new(0));
        drop(counting(&count));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_unsubscribe_releases_once() {
        let count = Rc::new(Cell::new(0));
        counting(&count).unsubscribe();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn empty_and_default_hold_nothing() {
        assert!(!Subscription::empty().is_active());
        assert!(!Subscription::default().is_active());

        let count = Rc::new(Cell::new(0));
        assert!(counting(&count).is_active());
    }
}

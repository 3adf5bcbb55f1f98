//! Local reactive state with a single subscriber slot.
//!
//! Each piece of component state (visible, past hero, active section, typed text)
//! is a [`Signal`]. A signal notifies one subscriber, and only when the value
//! actually changes. Subscribing again replaces the previous subscriber.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::subscription::Subscription;

type Callback<T> = Box<dyn FnMut(&T) + 'static>;

struct SignalState<T> {
    value: T,
    subscriber: Option<u64>,
    callback: Option<Callback<T>>,
    next_subscriber_id: u64,
}

/// A shared value cell. Clones observe the same value.
pub struct Signal<T> {
    state: Rc<RefCell<SignalState<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState {
                value,
                subscriber: None,
                callback: None,
                next_subscriber_id: 0,
            })),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.state.borrow().value.clone()
    }

    /// Stores `value` and notifies the subscriber if it differs from the current one.
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let (id, mut callback) = {
            let mut state = self.state.borrow_mut();
            if state.value == value {
                return false;
            }
            state.value = value.clone();
            match (state.subscriber, state.callback.take()) {
                (Some(id), Some(callback)) => (id, callback),
                _ => return true,
            }
        };

        // The callback runs without a borrow held so it may read or write this signal.
        callback(&value);

        let mut state = self.state.borrow_mut();
        if state.subscriber == Some(id) && state.callback.is_none() {
            state.callback = Some(callback);
        }
        true
    }

    /// Installs `callback` as the only subscriber. The returned handle clears the
    /// slot on drop unless another subscriber has replaced it in the meantime.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_subscriber_id;
            state.next_subscriber_id += 1;
            state.subscriber = Some(id);
            state.callback = Some(Box::new(callback));
            id
        };

        let weak: Weak<RefCell<SignalState<T>>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            if state.subscriber == Some(id) {
                state.subscriber = None;
                state.callback = None;
            }
        })
    }

    /// Whether a live subscription currently occupies the slot.
    pub fn has_subscriber(&self) -> bool {
        self.state.borrow().subscriber.is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => f
                .debug_struct("Signal")
                .field("value", &state.value)
                .field("subscribed", &state.subscriber.is_some())
                .finish(),
            Err(_) => f.debug_struct("Signal").finish_non_exhaustive(),
        }
    }
}

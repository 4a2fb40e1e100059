// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change observers.
//!
//! Observers subscribe to a set of [`StateChannels`] and are called with the
//! subset that changed. Notification order is subscription order.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::StateChannels;

/// Handle returned by [`ObserverRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw value of the handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

type Callback = Box<dyn FnMut(StateChannels)>;

struct Observer {
    id: SubscriptionId,
    interest: StateChannels,
    callback: Callback,
}

/// Ordered set of change observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Observer>,
    next_id: u64,
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interests: Vec<_> = self
            .observers
            .iter()
            .map(|o| (o.id, o.interest))
            .collect();
        f.debug_struct("ObserverRegistry")
            .field("observers", &interests)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for changes on `interest`.
    ///
    /// Channels outside [`StateChannels::OBSERVABLE`] are ignored.
    pub fn subscribe<F>(&mut self, interest: StateChannels, callback: F) -> SubscriptionId
    where
        F: FnMut(StateChannels) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push(Observer {
            id,
            interest: interest & StateChannels::OBSERVABLE,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id);
        self.observers.len() != before
    }

    /// Notify every observer whose interest intersects `changed`.
    ///
    /// Each observer receives only the channels it asked for. Returns the
    /// number of observers called.
    pub fn publish(&mut self, changed: StateChannels) -> usize {
        if changed.is_empty() {
            return 0;
        }
        let mut notified = 0;
        for observer in &mut self.observers {
            let relevant = observer.interest & changed;
            if !relevant.is_empty() {
                (observer.callback)(relevant);
                notified += 1;
            }
        }
        notified
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;
    use std::vec;

    #[test]
    fn observers_receive_only_their_channels() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        let a = log.clone();
        registry.subscribe(StateChannels::ANNOTATIONS, move |c| {
            a.borrow_mut().push(('a', c));
        });
        let b = log.clone();
        registry.subscribe(
            StateChannels::TRANSFORM | StateChannels::ACTIVE_TOOL,
            move |c| b.borrow_mut().push(('b', c)),
        );

        let called = registry.publish(StateChannels::TRANSFORM | StateChannels::FILE_INFO);
        assert_eq!(called, 1);
        assert_eq!(*log.borrow(), vec![('b', StateChannels::TRANSFORM)]);
    }

    #[test]
    fn notification_follows_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        for tag in 0..3_u8 {
            let sink = log.clone();
            registry.subscribe(StateChannels::ANNOTATIONS, move |_| {
                sink.borrow_mut().push(tag);
            });
        }
        registry.publish(StateChannels::ANNOTATIONS);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut registry = ObserverRegistry::new();
        let sink = count.clone();
        let id = registry.subscribe(StateChannels::ANNOTATIONS, move |_| {
            *sink.borrow_mut() += 1;
        });

        registry.publish(StateChannels::ANNOTATIONS);
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.publish(StateChannels::ANNOTATIONS);
        assert_eq!(*count.borrow(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn drag_preview_cannot_be_observed() {
        let mut registry = ObserverRegistry::new();
        registry.subscribe(StateChannels::all(), |_| {});
        assert_eq!(registry.publish(StateChannels::DRAG_PREVIEW), 0);
        assert_eq!(registry.publish(StateChannels::empty()), 0);
    }
}

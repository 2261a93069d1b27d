// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A structural-change notification broadcast to every subscribed persistent side container.
#[derive(Copy, Clone, Debug)]
pub enum TrackerEvent<K> {
    Erase(K),
    Clear,
    Reserve(usize),
}

type Subscriber<K> = Box<dyn FnMut(TrackerEvent<K>) + Send>;

/// Registry a storage representation owns; persistent side containers subscribe on construction
/// and unsubscribe on drop. Uses reference counting (`Arc`/`Weak`) rather than raw-pointer
/// bookkeeping, since a subscriber returned by value from a `&self` method cannot borrow the
/// tracker for its own lifetime in safe Rust.
#[derive(Clone, Default)]
pub struct Tracker<K> {
    inner: Arc<Mutex<TrackerInner<K>>>,
}

#[derive(Default)]
struct TrackerInner<K> {
    next_id: u64,
    subscribers: Vec<(u64, Subscriber<K>)>,
}

/// Handle returned to a subscriber; dropping it unsubscribes.
pub struct Subscription<K> {
    id: u64,
    tracker: Weak<Mutex<TrackerInner<K>>>,
}

impl<K> Drop for Subscription<K> {
    fn drop(&mut self) {
        if let Some(inner) = self.tracker.upgrade() {
            inner.lock().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl<K> Tracker<K> {
    pub fn new() -> Self {
        Tracker {
            inner: Arc::new(Mutex::new(TrackerInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Subscribes `on_event` to this tracker's broadcasts; returns a guard that unsubscribes on
    /// drop.
    pub fn subscribe(&self, on_event: impl FnMut(TrackerEvent<K>) + Send + 'static) -> Subscription<K> {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(on_event)));
        Subscription {
            id,
            tracker: Arc::downgrade(&self.inner),
        }
    }
}

impl<K: Copy> Tracker<K> {
    pub fn broadcast_erase(&self, k: K) {
        let mut inner = self.inner.lock();
        for (_, sub) in inner.subscribers.iter_mut() {
            sub(TrackerEvent::Erase(k));
        }
    }

    pub fn broadcast_clear(&self) {
        let mut inner = self.inner.lock();
        for (_, sub) in inner.subscribers.iter_mut() {
            sub(TrackerEvent::Clear);
        }
    }

    pub fn broadcast_reserve(&self, n: usize) {
        let mut inner = self.inner.lock();
        for (_, sub) in inner.subscribers.iter_mut() {
            sub(TrackerEvent::Reserve(n));
        }
    }
}

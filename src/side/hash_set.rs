// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::sync::Arc;

use fnv::FnvHashSet;
use parking_lot::Mutex;

use crate::handle::Handle;

use super::tracker::{Subscription, Tracker, TrackerEvent};
use super::SideSet;

/// A hash-backed set over any handle, tracked by the owning representation's [`Tracker`].
pub struct PersistentHashSet<K: Handle> {
    data: Arc<Mutex<FnvHashSet<K>>>,
    _subscription: Subscription<K>,
}

impl<K: Handle + Send + 'static> PersistentHashSet<K> {
    pub fn new(tracker: &Tracker<K>) -> Self {
        let data = Arc::new(Mutex::new(FnvHashSet::default()));
        let data_for_sub = Arc::clone(&data);
        let subscription = tracker.subscribe(move |event| {
            let mut data = data_for_sub.lock();
            match event {
                TrackerEvent::Erase(k) => {
                    data.remove(&k);
                }
                TrackerEvent::Clear => data.clear(),
                TrackerEvent::Reserve(n) => data.reserve(n),
            }
        });
        PersistentHashSet {
            data,
            _subscription: subscription,
        }
    }
}

impl<K: Handle> SideSet<K> for PersistentHashSet<K> {
    fn contains(&self, k: K) -> bool {
        self.data.lock().contains(&k)
    }

    fn insert(&mut self, k: K) -> bool {
        self.data.lock().insert(k)
    }

    fn erase(&mut self, k: K) -> bool {
        self.data.lock().remove(&k)
    }

    fn len(&self) -> usize {
        self.data.lock().len()
    }
}

/// A hash-backed set that does not subscribe to the owning graph's tracker.
pub struct EphemeralHashSet<K: Handle> {
    data: FnvHashSet<K>,
}

impl<K: Handle> Default for EphemeralHashSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Handle> EphemeralHashSet<K> {
    pub fn new() -> Self {
        EphemeralHashSet { data: FnvHashSet::default() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.data.iter()
    }
}

impl<K: Handle> SideSet<K> for EphemeralHashSet<K> {
    fn contains(&self, k: K) -> bool {
        self.data.contains(&k)
    }

    fn insert(&mut self, k: K) -> bool {
        self.data.insert(k)
    }

    fn erase(&mut self, k: K) -> bool {
        self.data.remove(&k)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::sync::Arc;

use fnv::FnvHashMap;
use parking_lot::Mutex;

use crate::handle::Handle;

use super::tracker::{Subscription, Tracker, TrackerEvent};
use super::SideMap;

/// A hash-backed map over any [`Handle`] (iterator, pointer, or tuple handles), tracked by the
/// owning representation's [`Tracker`].
pub struct PersistentHashMap<K: Handle, T> {
    data: Arc<Mutex<FnvHashMap<K, T>>>,
    default: T,
    _subscription: Subscription<K>,
}

impl<K, T> PersistentHashMap<K, T>
where
    K: Handle + Send + 'static,
    T: Clone + Send + 'static,
{
    pub fn new(tracker: &Tracker<K>, default: T) -> Self {
        let data = Arc::new(Mutex::new(FnvHashMap::default()));
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
        PersistentHashMap {
            data,
            default,
            _subscription: subscription,
        }
    }
}

impl<K: Handle, T: Clone> SideMap<K, T> for PersistentHashMap<K, T> {
    fn get(&self, k: K) -> T {
        self.data.lock().get(&k).cloned().unwrap_or_else(|| self.default.clone())
    }

    fn assign(&mut self, k: K, v: T) {
        self.data.lock().insert(k, v);
    }

    fn exchange(&mut self, k: K, v: T) -> T {
        let mut data = self.data.lock();
        let prev = data.get(&k).cloned().unwrap_or_else(|| self.default.clone());
        data.insert(k, v);
        prev
    }
}

/// A hash-backed map that does not subscribe to the owning graph's tracker; valid only while the
/// graph is not structurally mutated.
pub struct EphemeralHashMap<K: Handle, T> {
    data: FnvHashMap<K, T>,
    default: T,
}

impl<K: Handle, T: Clone> EphemeralHashMap<K, T> {
    pub fn new(default: T) -> Self {
        EphemeralHashMap {
            data: FnvHashMap::default(),
            default,
        }
    }
}

impl<K: Handle, T: Clone> SideMap<K, T> for EphemeralHashMap<K, T> {
    fn get(&self, k: K) -> T {
        self.data.get(&k).cloned().unwrap_or_else(|| self.default.clone())
    }

    fn assign(&mut self, k: K, v: T) {
        self.data.insert(k, v);
    }

    fn exchange(&mut self, k: K, v: T) -> T {
        let prev = self.data.get(&k).cloned().unwrap_or_else(|| self.default.clone());
        self.data.insert(k, v);
        prev
    }
}

// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::sync::Arc;

use parking_lot::Mutex;

use crate::handle::DenseHandle;

use super::tracker::{Subscription, Tracker, TrackerEvent};
use super::SideMap;

/// A `Vec`-backed map over a dense handle, tracked by the owning representation's [`Tracker`].
/// Growable, `reserve`-driven, and reset to the default on erase/clear.
pub struct PersistentDenseMap<K, T> {
    data: Arc<Mutex<Vec<T>>>,
    default: T,
    _subscription: Subscription<K>,
}

impl<K, T> PersistentDenseMap<K, T>
where
    K: DenseHandle + Send + 'static,
    T: Clone + Send + 'static,
{
    pub fn new(tracker: &Tracker<K>, default: T) -> Self {
        let data = Arc::new(Mutex::new(Vec::new()));
        let data_for_sub = Arc::clone(&data);
        let default_for_sub = default.clone();
        let subscription = tracker.subscribe(move |event| {
            let mut data = data_for_sub.lock();
            match event {
                TrackerEvent::Erase(k) => {
                    if let Some(slot) = data.get_mut(k.index()) {
                        *slot = default_for_sub.clone();
                    }
                }
                TrackerEvent::Clear => data.clear(),
                TrackerEvent::Reserve(n) => {
                    if data.len() < n {
                        data.resize(n, default_for_sub.clone());
                    }
                }
            }
        });
        PersistentDenseMap {
            data,
            default,
            _subscription: subscription,
        }
    }

    fn ensure(&self, index: usize) {
        let mut data = self.data.lock();
        if data.len() <= index {
            data.resize(index + 1, self.default.clone());
        }
    }
}

impl<K: DenseHandle, T: Clone> SideMap<K, T> for PersistentDenseMap<K, T> {
    fn get(&self, k: K) -> T {
        self.data
            .lock()
            .get(k.index())
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    fn assign(&mut self, k: K, v: T) {
        self.ensure(k.index());
        self.data.lock()[k.index()] = v;
    }

    fn exchange(&mut self, k: K, v: T) -> T {
        self.ensure(k.index());
        std::mem::replace(&mut self.data.lock()[k.index()], v)
    }
}

/// A fixed-size `Vec`-backed map, sized once at construction and never resized. Valid only while
/// the owning graph's vertex/edge count does not grow past the size given at construction.
pub struct EphemeralDenseMap<K, T> {
    data: Vec<T>,
    default: T,
    _marker: std::marker::PhantomData<K>,
}

impl<K: DenseHandle, T: Clone> EphemeralDenseMap<K, T> {
    pub fn new(capacity: usize, default: T) -> Self {
        EphemeralDenseMap {
            data: vec![default.clone(); capacity],
            default,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<K: DenseHandle, T: Clone> SideMap<K, T> for EphemeralDenseMap<K, T> {
    fn get(&self, k: K) -> T {
        self.data.get(k.index()).cloned().unwrap_or_else(|| self.default.clone())
    }

    fn assign(&mut self, k: K, v: T) {
        self.data[k.index()] = v;
    }

    fn exchange(&mut self, k: K, v: T) -> T {
        std::mem::replace(&mut self.data[k.index()], v)
    }
}

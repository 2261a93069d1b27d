// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::sync::Arc;

use fixedbitset::FixedBitSet;
use parking_lot::Mutex;

use crate::handle::DenseHandle;

use super::tracker::{Subscription, Tracker, TrackerEvent};
use super::SideSet;

/// A dense, `Vec<bool>`-backed set over a dense handle, tracked by the owning representation.
pub struct PersistentDenseSet<K> {
    data: Arc<Mutex<Vec<bool>>>,
    len: Arc<Mutex<usize>>,
    _subscription: Subscription<K>,
}

impl<K: DenseHandle + Send + 'static> PersistentDenseSet<K> {
    pub fn new(tracker: &Tracker<K>) -> Self {
        let data = Arc::new(Mutex::new(Vec::new()));
        let len = Arc::new(Mutex::new(0usize));
        let data_for_sub = Arc::clone(&data);
        let len_for_sub = Arc::clone(&len);
        let subscription = tracker.subscribe(move |event| {
            let mut data = data_for_sub.lock();
            match event {
                TrackerEvent::Erase(k) => {
                    if let Some(slot) = data.get_mut(k.index()) {
                        if std::mem::replace(slot, false) {
                            *len_for_sub.lock() -= 1;
                        }
                    }
                }
                TrackerEvent::Clear => {
                    data.clear();
                    *len_for_sub.lock() = 0;
                }
                TrackerEvent::Reserve(n) => {
                    if data.len() < n {
                        data.resize(n, false);
                    }
                }
            }
        });
        PersistentDenseSet {
            data,
            len,
            _subscription: subscription,
        }
    }

    fn ensure(&self, index: usize) {
        let mut data = self.data.lock();
        if data.len() <= index {
            data.resize(index + 1, false);
        }
    }
}

impl<K: DenseHandle> SideSet<K> for PersistentDenseSet<K> {
    fn contains(&self, k: K) -> bool {
        self.data.lock().get(k.index()).copied().unwrap_or(false)
    }

    fn insert(&mut self, k: K) -> bool {
        self.ensure(k.index());
        let mut data = self.data.lock();
        let slot = &mut data[k.index()];
        if *slot {
            false
        } else {
            *slot = true;
            *self.len.lock() += 1;
            true
        }
    }

    fn erase(&mut self, k: K) -> bool {
        let mut data = self.data.lock();
        match data.get_mut(k.index()) {
            Some(slot) if *slot => {
                *slot = false;
                *self.len.lock() -= 1;
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        *self.len.lock()
    }
}

/// A fixed-capacity bitmap set, sized once at construction; O(1) membership, O(n) iteration.
///
/// Backed by a `FixedBitSet` membership bitmap plus a `Vec<K>` insertion-order log for iteration;
/// erase is O(n) against that log.
pub struct EphemeralDenseSet<K> {
    bits: FixedBitSet,
    order: Vec<K>,
}

impl<K: DenseHandle> EphemeralDenseSet<K> {
    pub fn new(capacity: usize) -> Self {
        EphemeralDenseSet {
            bits: FixedBitSet::with_capacity(capacity),
            order: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied().filter(move |k| self.bits.contains(k.index()))
    }
}

impl<K: DenseHandle> SideSet<K> for EphemeralDenseSet<K> {
    fn contains(&self, k: K) -> bool {
        self.bits.contains(k.index())
    }

    fn insert(&mut self, k: K) -> bool {
        if self.bits.put(k.index()) {
            false
        } else {
            self.order.push(k);
            true
        }
    }

    fn erase(&mut self, k: K) -> bool {
        let was_set = self.bits.contains(k.index());
        self.bits.set(k.index(), false);
        was_set
    }

    fn len(&self) -> usize {
        self.bits.count_ones(..)
    }
}

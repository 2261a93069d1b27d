// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! A lock-free, indexable, append-only vector.
//!
//! Slots get dense, fetch-add-assigned integer indices, since the atomic storage representations
//! are committed to integer handles. Growth is geometric (segment `k` holds `BASE * 2^k` slots)
//! and segments are installed lazily with a single `compare_exchange` each; a fixed-capacity mode
//! backs the pre-reserved contiguous representation with exactly one segment.

use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

use crate::error::{GraphError, GraphResult};

const BASE_CAPACITY: usize = 32;
const MAX_SEGMENTS: usize = 40;

struct Segment<T> {
    slots: Box<[AtomicPtr<T>]>,
}

impl<T> Segment<T> {
    fn new(capacity: usize) -> Box<Self> {
        let slots = (0..capacity).map(|_| AtomicPtr::new(std::ptr::null_mut())).collect();
        Box::new(Segment { slots })
    }
}

/// Lock-free append-only vector with dense integer indices.
///
/// In "growing" mode (`AtomicSegVec::new`), `push` never fails and capacity is unbounded (up to
/// `usize::MAX`). In "fixed" mode (`AtomicSegVec::with_capacity`), capacity is reserved up front as
/// a single segment and `push` past that capacity returns a precondition error, matching the
/// contiguous-atomic representation's pre-reservation requirement.
pub struct AtomicSegVec<T> {
    segments: Vec<AtomicPtr<Segment<T>>>,
    next_index: AtomicUsize,
    published: AtomicUsize,
    fixed_capacity: Option<usize>,
}

fn locate(index: usize) -> (usize, usize) {
    let mut segment = 0;
    let mut offset = 0usize;
    let mut capacity = BASE_CAPACITY;
    loop {
        if index < offset + capacity {
            return (segment, index - offset);
        }
        offset += capacity;
        capacity *= 2;
        segment += 1;
    }
}

fn segment_capacity(segment: usize) -> usize {
    BASE_CAPACITY << segment
}

impl<T> AtomicSegVec<T> {
    pub fn new() -> Self {
        AtomicSegVec {
            segments: (0..MAX_SEGMENTS).map(|_| AtomicPtr::new(std::ptr::null_mut())).collect(),
            next_index: AtomicUsize::new(0),
            published: AtomicUsize::new(0),
            fixed_capacity: None,
        }
    }

    /// Pre-reserves a single, exactly-sized segment; `push` beyond `capacity` fails.
    pub fn with_capacity(capacity: usize) -> Self {
        let vec = AtomicSegVec {
            segments: vec![AtomicPtr::new(std::ptr::null_mut())],
            next_index: AtomicUsize::new(0),
            published: AtomicUsize::new(0),
            fixed_capacity: Some(capacity),
        };
        let segment = Segment::new(capacity);
        vec.segments[0].store(Box::into_raw(segment), Ordering::Release);
        vec
    }

    fn segment_for(&self, segment: usize) -> &Segment<T> {
        let ptr = self.segments[segment].load(Ordering::Acquire);
        if !ptr.is_null() {
            // Safety: once stored, a segment pointer is never replaced or freed while `self` lives.
            return unsafe { &*ptr };
        }
        let capacity = segment_capacity(segment);
        let new_segment = Segment::new(capacity);
        let new_ptr = Box::into_raw(new_segment);
        match self.segments[segment].compare_exchange(
            std::ptr::null_mut(),
            new_ptr,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => unsafe { &*new_ptr },
            Err(existing) => {
                // Safety: `existing` was already published by the winning thread.
                unsafe {
                    drop(Box::from_raw(new_ptr));
                    &*existing
                }
            }
        }
    }

    /// Claims a fresh dense index and stores `value` there; returns the claimed index.
    pub fn push(&self, value: T) -> GraphResult<usize> {
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        if let Some(capacity) = self.fixed_capacity {
            if index >= capacity {
                self.next_index.store(capacity, Ordering::Relaxed);
                return Err(GraphError::PreconditionUnmet("atomic capacity exceeded"));
            }
        }
        let (segment, offset) = if self.fixed_capacity.is_some() { (0, index) } else { locate(index) };
        let segment = if self.fixed_capacity.is_some() {
            // Safety: segment 0 was published eagerly by `with_capacity`.
            unsafe { &*self.segments[0].load(Ordering::Acquire) }
        } else {
            self.segment_for(segment)
        };
        let boxed = Box::into_raw(Box::new(value));
        segment.slots[offset].store(boxed, Ordering::Release);
        self.published.fetch_add(1, Ordering::Relaxed);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.next_index.load(Ordering::Acquire) {
            return None;
        }
        let (segment, offset) = if let Some(capacity) = self.fixed_capacity {
            if index >= capacity {
                return None;
            }
            (0, index)
        } else {
            locate(index)
        };
        let segment_ptr = self.segments[segment].load(Ordering::Acquire);
        if segment_ptr.is_null() {
            return None;
        }
        // Safety: published segments are never freed or replaced.
        let segment = unsafe { &*segment_ptr };
        let ptr = segment.slots[offset].load(Ordering::Acquire);
        if ptr.is_null() {
            None
        } else {
            // Safety: once published, a slot's pointee lives as long as `self`.
            Some(unsafe { &*ptr })
        }
    }

    /// A lower bound on the number of fully published entries; may under-count while inserts are
    /// in flight.
    pub fn conservative_len(&self) -> usize {
        self.published.load(Ordering::Acquire)
    }

    pub fn claimed_len(&self) -> usize {
        self.next_index.load(Ordering::Acquire)
    }
}

impl<T> Default for AtomicSegVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T: Send> Send for AtomicSegVec<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicSegVec<T> {}

impl<T> Drop for AtomicSegVec<T> {
    fn drop(&mut self) {
        let claimed = *self.next_index.get_mut();
        for segment_ptr in &self.segments {
            let ptr = *segment_ptr.get_mut();
            if !ptr.is_null() {
                // Safety: `self` is being dropped, so no other reference can observe this.
                let segment = unsafe { Box::from_raw(ptr) };
                for slot in segment.slots.iter() {
                    let slot_ptr = slot.load(Ordering::Relaxed);
                    if !slot_ptr.is_null() {
                        unsafe {
                            drop(Box::from_raw(slot_ptr));
                        }
                    }
                }
            }
        }
        let _ = claimed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn sequential_push_and_get() {
        let v: AtomicSegVec<u64> = AtomicSegVec::new();
        for i in 0..100u64 {
            let idx = v.push(i).unwrap();
            assert_eq!(idx as u64, i);
        }
        for i in 0..100u64 {
            assert_eq!(*v.get(i as usize).unwrap(), i);
        }
    }

    #[test]
    fn concurrent_push_assigns_distinct_indices() {
        let v: Arc<AtomicSegVec<u64>> = Arc::new(AtomicSegVec::new());
        let mut handles = Vec::new();
        for t in 0..8u64 {
            let v = Arc::clone(&v);
            handles.push(thread::spawn(move || {
                let mut indices = Vec::new();
                for i in 0..200u64 {
                    indices.push(v.push(t * 1000 + i).unwrap());
                }
                indices
            }));
        }
        let mut all_indices = Vec::new();
        for h in handles {
            all_indices.extend(h.join().unwrap());
        }
        all_indices.sort_unstable();
        let expected: Vec<usize> = (0..1600).collect();
        assert_eq!(all_indices, expected);
    }

    #[test]
    fn fixed_capacity_rejects_overflow() {
        let v: AtomicSegVec<u64> = AtomicSegVec::with_capacity(4);
        for i in 0..4u64 {
            v.push(i).unwrap();
        }
        assert!(v.push(4).is_err());
    }
}

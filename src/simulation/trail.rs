//! Bounded position history kept per body
//!
//! A trail is a FIFO ring of the most recent world-space positions (metres).
//! It is a rendering aid only and never feeds back into the physics.

use std::collections::VecDeque;

use super::states::NVec2;

/// Default number of points kept per body
pub const DEFAULT_TRAIL_LENGTH: usize = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize, // 0 disables the trail
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest one once the trail is full
    pub fn push(&mut self, p: NVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

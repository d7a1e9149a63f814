//! Bounded orbit trails
//!
//! A `Trail` keeps the chronological history of a body's positions (oldest
//! first). Every push runs the eviction policy so trails stay visually
//! bounded without clipping the outer planets too early.

use std::collections::VecDeque;

use super::params::AU;
use super::states::NVec2;

/// Trails longer than this are pruned while the body is within `WIDE_LIMIT_X`
pub const WIDE_MAX_LEN: usize = 1000;
/// Trails longer than this are pruned while the body is within `NEAR_LIMIT_X`
pub const NEAR_MAX_LEN: usize = 600;
/// |x| bound (meters) for the long-trail rule
pub const WIDE_LIMIT_X: f64 = 2.0 * AU;
/// |x| bound (meters, exclusive) for the short-trail rule
pub const NEAR_LIMIT_X: f64 = AU - 10_000.0;

#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<NVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the newest position and apply the eviction policy
    ///
    /// Both rules look at the x coordinate of the newest point and are
    /// checked one after the other, so a single push may evict two points.
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);

        let x = p.x.abs();

        if self.points.len() > WIDE_MAX_LEN && x <= WIDE_LIMIT_X {
            self.points.pop_front();
        }
        if self.points.len() > NEAR_MAX_LEN && 0.0 < x && x < NEAR_LIMIT_X {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }
}

impl FromIterator<NVec2> for Trail {
    /// Collect points without running the eviction policy (test fixtures, replays)
    fn from_iter<I: IntoIterator<Item = NVec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

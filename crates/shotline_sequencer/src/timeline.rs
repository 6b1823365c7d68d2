// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered shot collection and its range invariants.
//!
//! The timeline owns every shot of the editing session, keeps them
//! sorted by `span.start`, and guarantees that no mutation leaves two
//! shots overlapping or two shots sharing a name. A failed call
//! changes nothing.

use crate::shot::{FrameSpan, Shot, ShotColor, ShotId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// First frame used when a timeline has no shots yet
pub const DEFAULT_ORIGIN: i64 = 1;

/// Error from a timeline mutation
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// A shot with this name already exists
    #[error("A shot named {0:?} already exists")]
    NameConflict(String),

    /// Shot length fell below one frame
    #[error("Shot length must be at least one frame, got {0}")]
    InvalidLength(i64),

    /// No shot to operate on
    #[error("Shot not found")]
    NotFound,

    /// Growth would reach into a neighboring shot
    #[error("Frame range would overlap {0:?}")]
    RangeConflict(String),
}

/// Ordered collection of shots on the shared frame axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// Shots keyed by ID, kept sorted by `span.start`
    shots: IndexMap<ShotId, Shot>,
    /// First frame used for the first shot
    pub origin: i64,
}

impl Timeline {
    /// Create an empty timeline starting at [`DEFAULT_ORIGIN`]
    pub fn new() -> Self {
        Self::with_origin(DEFAULT_ORIGIN)
    }

    /// Create an empty timeline starting at `origin`
    pub fn with_origin(origin: i64) -> Self {
        Self {
            shots: IndexMap::new(),
            origin,
        }
    }

    /// Create a shot placed after `after` (after the last shot when
    /// `None`), at the first frame where it fits without overlapping
    /// any existing shot in forward order.
    pub fn create_shot(
        &mut self,
        name: impl Into<String>,
        color: ShotColor,
        length: i64,
        camera: impl Into<String>,
        after: Option<ShotId>,
    ) -> Result<ShotId, TimelineError> {
        let name = name.into();
        if length < 1 {
            return Err(TimelineError::InvalidLength(length));
        }
        if self.shots.values().any(|shot| shot.name == name) {
            return Err(TimelineError::NameConflict(name));
        }

        let anchor = match after {
            Some(id) => Some(self.shot(id).ok_or(TimelineError::NotFound)?),
            None => self.shots.values().last(),
        };
        let mut start = anchor.map_or(self.origin, |shot| shot.span.end);

        // First-fit scan: walk shots in ascending order, pushing the
        // candidate past any occupied range it would overlap.
        for shot in self.shots.values() {
            let candidate = FrameSpan::with_len(start, length);
            if shot.span.end <= candidate.start {
                continue;
            }
            if shot.span.start >= candidate.end {
                break;
            }
            start = shot.span.end;
        }

        let shot = Shot::new(name, FrameSpan::with_len(start, length), color, camera);
        let id = shot.id;
        self.shots.insert(id, shot);
        self.sort_shots();
        Ok(id)
    }

    /// Remove a shot. The resulting gap stays open and link records on
    /// surviving shots are untouched.
    pub fn delete_shot(&mut self, id: ShotId) -> Result<Shot, TimelineError> {
        self.shots.shift_remove(&id).ok_or(TimelineError::NotFound)
    }

    /// Move a shot's end frame by `delta`, leaving every other shot in
    /// place. Growth stops at the next shot's start.
    pub fn resize(&mut self, id: ShotId, delta: i64) -> Result<FrameSpan, TimelineError> {
        let index = self.shots.get_index_of(&id).ok_or(TimelineError::NotFound)?;
        let new_end = {
            let Some(shot) = self.nth(index) else {
                return Err(TimelineError::NotFound);
            };
            let new_end = shot.span.end + delta;
            if new_end - shot.span.start < 1 {
                return Err(TimelineError::InvalidLength(new_end - shot.span.start));
            }
            new_end
        };
        if delta > 0 {
            if let Some(next) = self.nth(index + 1) {
                if new_end > next.span.start {
                    return Err(TimelineError::RangeConflict(next.name.clone()));
                }
            }
        }
        match self.nth_mut(index) {
            Some(shot) => {
                shot.span.end = new_end;
                Ok(shot.span)
            }
            None => Err(TimelineError::NotFound),
        }
    }

    /// Shots in ascending range order
    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.shots.values()
    }

    /// Get a shot by ID
    pub fn shot(&self, id: ShotId) -> Option<&Shot> {
        self.shots.get(&id)
    }

    /// Shot at `index` in ascending range order
    pub fn nth(&self, index: usize) -> Option<&Shot> {
        self.shots.get_index(index).map(|(_, shot)| shot)
    }

    /// Position of a shot in the timeline order
    pub fn index_of(&self, id: ShotId) -> Option<usize> {
        self.shots.get_index_of(&id)
    }

    /// Shot whose range contains `frame`
    pub fn shot_at(&self, frame: i64) -> Option<&Shot> {
        self.shots.values().find(|shot| shot.span.contains(frame))
    }

    /// Span from the first shot's start to the last shot's end
    pub fn sequence_span(&self) -> Option<FrameSpan> {
        let first = self.shots.values().next()?;
        let last = self.shots.values().last()?;
        Some(FrameSpan {
            start: first.span.start,
            end: last.span.end,
        })
    }

    /// Number of shots
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// True when the timeline holds no shots
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Remove every shot
    pub fn clear(&mut self) {
        self.shots.clear();
    }

    pub(crate) fn nth_mut(&mut self, index: usize) -> Option<&mut Shot> {
        self.shots.get_index_mut(index).map(|(_, shot)| shot)
    }

    /// Shift every shot at or after `from` by `offset` frames.
    /// Preserves relative order, so the sort invariant holds.
    pub(crate) fn shift_tail(&mut self, from: usize, offset: i64) {
        for index in from..self.shots.len() {
            if let Some((_, shot)) = self.shots.get_index_mut(index) {
                shot.span = shot.span.shifted(offset);
            }
        }
    }

    fn sort_shots(&mut self) {
        self.shots
            .sort_by(|_, a, _, b| a.span.start.cmp(&b.span.start));
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

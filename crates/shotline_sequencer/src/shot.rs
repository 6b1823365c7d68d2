// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shot and frame-range primitives.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShotId(pub Uuid);

impl ShotId {
    /// Create a new random shot ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShotId {
    fn default() -> Self {
        Self::new()
    }
}

/// Display color of a shot (RGBA); has no scheduling meaning
pub type ShotColor = [f32; 4];

/// Swatches cycled through for newly created shots
pub const DEFAULT_PALETTE: [ShotColor; 6] = [
    [0.96, 0.49, 0.0, 1.0],  // orange
    [0.35, 0.64, 0.95, 1.0], // blue
    [0.54, 0.86, 0.44, 1.0], // green
    [0.91, 0.42, 0.75, 1.0], // pink
    [0.99, 0.84, 0.31, 1.0], // yellow
    [0.63, 0.51, 0.93, 1.0], // violet
];

/// Half-open frame interval `[start, end)` on the shared frame axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSpan {
    /// First frame of the span
    pub start: i64,
    /// One past the last frame of the span
    pub end: i64,
}

impl FrameSpan {
    /// Create a span covering `len` frames from `start`
    pub fn with_len(start: i64, len: i64) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Number of frames covered
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// True when the span covers no frames
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `frame` falls inside the span
    pub fn contains(&self, frame: i64) -> bool {
        self.start <= frame && frame < self.end
    }

    /// True when the two spans share at least one frame
    pub fn overlaps(&self, other: &FrameSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The span moved by `offset` frames, keeping its length
    pub fn shifted(&self, offset: i64) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// The span widened by `amount` frames on both sides
    pub fn padded(&self, amount: i64) -> Self {
        Self {
            start: self.start - amount,
            end: self.end + amount,
        }
    }
}

/// A named, colored, frame-ranged segment of the timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    /// Unique shot ID, assigned at creation and never reused
    pub id: ShotId,
    /// Shot name, `SQ####_SH####` by convention, unique per timeline
    pub name: String,
    /// Occupied frame range
    pub span: FrameSpan,
    /// Display color
    pub color: ShotColor,
    /// Name-only reference to the host camera this shot cuts to
    pub camera: String,
    /// Gap closed in front of this shot by the last link pass, if any
    pub gap_before: Option<i64>,
}

impl Shot {
    /// Create a shot with a fresh ID and no link record
    pub fn new(
        name: impl Into<String>,
        span: FrameSpan,
        color: ShotColor,
        camera: impl Into<String>,
    ) -> Self {
        Self {
            id: ShotId::new(),
            name: name.into(),
            span,
            color,
            camera: camera.into(),
            gap_before: None,
        }
    }

    /// True when this shot's leading edge is closed against its predecessor
    pub fn is_linked(&self) -> bool {
        self.gap_before.is_some()
    }

    /// Shot length in frames
    pub fn duration(&self) -> i64 {
        self.span.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains_is_half_open() {
        let span = FrameSpan::with_len(1, 24);
        assert!(span.contains(1));
        assert!(span.contains(24));
        assert!(!span.contains(25));
        assert!(!span.contains(0));
        assert_eq!(span.len(), 24);
    }

    #[test]
    fn test_span_overlap() {
        let a = FrameSpan { start: 1, end: 25 };
        let b = FrameSpan { start: 25, end: 49 };
        let c = FrameSpan { start: 24, end: 30 };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_span_shift_keeps_length() {
        let span = FrameSpan { start: 40, end: 64 };
        let moved = span.shifted(-15);
        assert_eq!(moved, FrameSpan { start: 25, end: 49 });
        assert_eq!(moved.len(), span.len());
    }

    #[test]
    fn test_new_shot_is_unlinked() {
        let shot = Shot::new(
            "SQ0010_SH0010",
            FrameSpan::with_len(1, 24),
            DEFAULT_PALETTE[0],
            "CAM_SQ0010_SH0010",
        );
        assert!(!shot.is_linked());
        assert_eq!(shot.duration(), 24);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Focus cursor and viewport range computations.
//!
//! The cursor marks the active shot. It is mutated only by navigation
//! and by create/delete retargeting; the span computations here are
//! pure, and the embedding session applies them to the host viewport.

use crate::shot::{FrameSpan, ShotId};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Cursor over the timeline's shot order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FocusCursor {
    active: Option<ShotId>,
}

impl FocusCursor {
    /// Cursor with no active shot
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Currently active shot, if any
    pub fn active(&self) -> Option<ShotId> {
        self.active
    }

    /// Point the cursor at a shot
    pub fn set(&mut self, id: ShotId) {
        self.active = Some(id);
    }

    /// Clear the cursor
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Position of the active shot in the timeline order
    pub fn index(&self, timeline: &Timeline) -> Option<usize> {
        self.active.and_then(|id| timeline.index_of(id))
    }

    /// Span of the active shot
    pub fn active_span(&self, timeline: &Timeline) -> Option<FrameSpan> {
        self.active
            .and_then(|id| timeline.shot(id))
            .map(|shot| shot.span)
    }

    /// Move to the next shot in range order. Stays put at the end and
    /// adopts the first shot when nothing is active yet. Returns true
    /// when the cursor moved.
    pub fn focus_next(&mut self, timeline: &Timeline) -> bool {
        let target = match self.index(timeline) {
            Some(index) => timeline.nth(index + 1),
            None => timeline.shots().next(),
        };
        match target {
            Some(shot) => {
                self.active = Some(shot.id);
                true
            }
            None => false,
        }
    }

    /// Move to the previous shot in range order. Stays put at the
    /// start and adopts the last shot when nothing is active yet.
    /// Returns true when the cursor moved.
    pub fn focus_previous(&mut self, timeline: &Timeline) -> bool {
        let target = match self.index(timeline) {
            Some(0) => None,
            Some(index) => timeline.nth(index - 1),
            None => timeline.shots().last(),
        };
        match target {
            Some(shot) => {
                self.active = Some(shot.id);
                true
            }
            None => false,
        }
    }

    /// Retarget after the shot at `index` was deleted: the following
    /// shot, else the preceding one, else nothing.
    pub fn retarget_after_delete(&mut self, timeline: &Timeline, index: usize) {
        self.active = timeline
            .nth(index)
            .or_else(|| index.checked_sub(1).and_then(|i| timeline.nth(i)))
            .map(|shot| shot.id);
    }
}

/// Target playback range for a defocus request.
///
/// When the viewport currently frames the active shot or the whole
/// sequence, or already contains the sequence with slack, the range
/// widens by `padding` on both sides; otherwise it snaps to the
/// sequence span. `None` when the timeline is empty.
pub fn widen_plan(
    timeline: &Timeline,
    cursor: &FocusCursor,
    current: FrameSpan,
    padding: i64,
) -> Option<FrameSpan> {
    let sequence = timeline.sequence_span()?;
    let shot_focused = cursor
        .active_span(timeline)
        .is_some_and(|span| span == current);
    let sequence_focused = sequence == current;
    let fully_out = current.start < sequence.start && sequence.end < current.end;
    if shot_focused || sequence_focused || fully_out {
        Some(current.padded(padding))
    } else {
        Some(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::DEFAULT_PALETTE;

    fn timeline_with_shots(count: usize) -> (Timeline, Vec<ShotId>) {
        let mut timeline = Timeline::new();
        let mut ids = Vec::new();
        for index in 0..count {
            let name = format!("SQ0010_SH{:04}", (index + 1) * 10);
            let camera = format!("CAM_{name}");
            ids.push(
                timeline
                    .create_shot(name, DEFAULT_PALETTE[0], 24, camera, None)
                    .unwrap(),
            );
        }
        (timeline, ids)
    }

    #[test]
    fn test_empty_cursor_adopts_ends() {
        let (timeline, ids) = timeline_with_shots(3);

        let mut cursor = FocusCursor::new();
        assert!(cursor.focus_next(&timeline));
        assert_eq!(cursor.active(), Some(ids[0]));

        let mut cursor = FocusCursor::new();
        assert!(cursor.focus_previous(&timeline));
        assert_eq!(cursor.active(), Some(ids[2]));
    }

    #[test]
    fn test_navigation_stops_at_the_ends() {
        let (timeline, ids) = timeline_with_shots(2);
        let mut cursor = FocusCursor::new();
        cursor.set(ids[1]);

        assert!(!cursor.focus_next(&timeline));
        assert_eq!(cursor.active(), Some(ids[1]));

        assert!(cursor.focus_previous(&timeline));
        assert!(!cursor.focus_previous(&timeline));
        assert_eq!(cursor.active(), Some(ids[0]));
    }

    #[test]
    fn test_navigation_on_empty_timeline_is_noop() {
        let timeline = Timeline::new();
        let mut cursor = FocusCursor::new();
        assert!(!cursor.focus_next(&timeline));
        assert!(!cursor.focus_previous(&timeline));
        assert_eq!(cursor.active(), None);
    }

    #[test]
    fn test_retarget_prefers_the_following_shot() {
        let (mut timeline, ids) = timeline_with_shots(3);
        let mut cursor = FocusCursor::new();
        cursor.set(ids[1]);

        let index = timeline.index_of(ids[1]).unwrap();
        timeline.delete_shot(ids[1]).unwrap();
        cursor.retarget_after_delete(&timeline, index);
        assert_eq!(cursor.active(), Some(ids[2]));
    }

    #[test]
    fn test_retarget_falls_back_to_the_preceding_shot() {
        let (mut timeline, ids) = timeline_with_shots(2);
        let mut cursor = FocusCursor::new();
        cursor.set(ids[1]);

        let index = timeline.index_of(ids[1]).unwrap();
        timeline.delete_shot(ids[1]).unwrap();
        cursor.retarget_after_delete(&timeline, index);
        assert_eq!(cursor.active(), Some(ids[0]));
    }

    #[test]
    fn test_retarget_clears_on_the_last_deletion() {
        let (mut timeline, ids) = timeline_with_shots(1);
        let mut cursor = FocusCursor::new();
        cursor.set(ids[0]);

        timeline.delete_shot(ids[0]).unwrap();
        cursor.retarget_after_delete(&timeline, 0);
        assert_eq!(cursor.active(), None);
        // Navigation after the last deletion stays a no-op.
        assert!(!cursor.focus_next(&timeline));
        assert!(!cursor.focus_previous(&timeline));
    }

    #[test]
    fn test_widen_plan_pads_a_focused_shot() {
        let (timeline, ids) = timeline_with_shots(2);
        let mut cursor = FocusCursor::new();
        cursor.set(ids[0]);

        let current = FrameSpan { start: 1, end: 25 };
        assert_eq!(
            widen_plan(&timeline, &cursor, current, 24),
            Some(FrameSpan { start: -23, end: 49 })
        );
    }

    #[test]
    fn test_widen_plan_snaps_a_partial_view_to_the_sequence() {
        let (timeline, _) = timeline_with_shots(2);
        let cursor = FocusCursor::new();

        let current = FrameSpan { start: 10, end: 30 };
        assert_eq!(
            widen_plan(&timeline, &cursor, current, 24),
            Some(FrameSpan { start: 1, end: 49 })
        );
    }

    #[test]
    fn test_widen_plan_keeps_widening_a_containing_view() {
        let (timeline, _) = timeline_with_shots(2);
        let cursor = FocusCursor::new();

        let current = FrameSpan { start: -10, end: 60 };
        assert_eq!(
            widen_plan(&timeline, &cursor, current, 24),
            Some(FrameSpan { start: -34, end: 84 })
        );
    }
}

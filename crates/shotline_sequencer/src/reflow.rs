// SPDX-License-Identifier: MIT OR Apache-2.0
//! Gap closing and reopening across the shot order.
//!
//! Linking closes every gap between adjacent shots by shifting the
//! later shot and the whole suffix backward; the closed amount is
//! recorded on the shifted shot so unstacking can reverse it exactly.
//! Both passes walk pairs strictly in ascending order, so each shift
//! is computed against already-adjusted positions and can never
//! introduce an overlap.

use crate::shot::ShotId;
use crate::timeline::Timeline;

/// A shift applied to one shot during a reflow pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotShift {
    /// Shot that moved
    pub id: ShotId,
    /// Camera that should move with it
    pub camera: String,
    /// Signed frame offset applied to the shot
    pub offset: i64,
}

/// Close every gap between adjacent shots ("link").
///
/// Each shifted shot accumulates the closed amount in `gap_before`.
/// Idempotent: a second pass with no intervening edits finds no gaps
/// and applies no shifts. A timeline with fewer than two shots is left
/// untouched.
pub fn close_gaps(timeline: &mut Timeline) -> Vec<ShotShift> {
    let count = timeline.len();
    let mut moved = vec![0i64; count];
    for index in 1..count {
        let (Some(prev), Some(current)) = (timeline.nth(index - 1), timeline.nth(index)) else {
            continue;
        };
        let gap = current.span.start - prev.span.end;
        if gap <= 0 {
            continue;
        }
        timeline.shift_tail(index, -gap);
        if let Some(shot) = timeline.nth_mut(index) {
            shot.gap_before = Some(shot.gap_before.unwrap_or(0) + gap);
        }
        for offset in &mut moved[index..] {
            *offset -= gap;
        }
    }
    collect_shifts(timeline, moved)
}

/// Reopen every previously closed gap ("unstack").
///
/// Shots without a recorded gap are untouched; this never fabricates
/// separation that linking did not remove.
pub fn reopen_gaps(timeline: &mut Timeline) -> Vec<ShotShift> {
    let count = timeline.len();
    let mut moved = vec![0i64; count];
    for index in 0..count {
        let Some(gap) = timeline.nth(index).and_then(|shot| shot.gap_before) else {
            continue;
        };
        timeline.shift_tail(index, gap);
        if let Some(shot) = timeline.nth_mut(index) {
            shot.gap_before = None;
        }
        for offset in &mut moved[index..] {
            *offset += gap;
        }
    }
    collect_shifts(timeline, moved)
}

fn collect_shifts(timeline: &Timeline, moved: Vec<i64>) -> Vec<ShotShift> {
    timeline
        .shots()
        .zip(moved)
        .filter(|(_, offset)| *offset != 0)
        .map(|(shot, offset)| ShotShift {
            id: shot.id,
            camera: shot.camera.clone(),
            offset,
        })
        .collect()
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Exportable sequence records.
//!
//! The manifest is the only representation of a sequence the engine
//! defines for exchange with the outside world; actual file output is
//! the host's job.

use crate::shot::{Shot, ShotColor};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// First frame of a shot once rebased for delivery
pub const CUT_IN_FRAME: i64 = 1001;

/// One shot as it appears in the exported sequence data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Shot name
    pub name: String,
    /// Sequence the shot belongs to (the `SQ####` part of the name)
    pub sequence: String,
    /// First frame on the timeline
    pub start: i64,
    /// One past the last frame on the timeline
    pub end: i64,
    /// Shot length in frames
    pub length: i64,
    /// Delivery cut-in, rebased to [`CUT_IN_FRAME`]
    pub cut_in: i64,
    /// Delivery cut-out
    pub cut_out: i64,
    /// Display color
    pub color: ShotColor,
    /// Host camera name
    pub camera: String,
}

impl ShotRecord {
    /// Build the export record for one shot
    pub fn from_shot(shot: &Shot) -> Self {
        let sequence = shot
            .name
            .split('_')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name: shot.name.clone(),
            sequence,
            start: shot.span.start,
            end: shot.span.end,
            length: shot.duration(),
            cut_in: CUT_IN_FRAME,
            cut_out: CUT_IN_FRAME + shot.duration(),
            color: shot.color,
            camera: shot.camera.clone(),
        }
    }
}

/// Ordered export form of a whole timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceManifest {
    /// Sequence name shared by the shots
    pub sequence: String,
    /// Shot records in ascending range order
    pub shots: Vec<ShotRecord>,
}

impl SequenceManifest {
    /// Snapshot the timeline into export records
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let shots: Vec<ShotRecord> = timeline.shots().map(ShotRecord::from_shot).collect();
        let sequence = shots
            .first()
            .map(|record| record.sequence.clone())
            .unwrap_or_else(|| "SQ0010".to_string());
        Self { sequence, shots }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canonical shot and camera naming.
//!
//! Shot names follow the `SQ####_SH####` production convention. The
//! resolver derives the next free shot name from existing timeline
//! state; names that do not parse as the convention (e.g. shots
//! imported from elsewhere) are simply ignored.

use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Prefix joining a shot name to its host camera
pub const CAMERA_PREFIX: &str = "CAM_";

/// Canonical camera name for a shot
pub fn camera_name_for(shot_name: &str) -> String {
    format!("{CAMERA_PREFIX}{shot_name}")
}

/// A parsed `SQ####_SH####` shot name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotNumber {
    /// Sequence number (the `SQ` part)
    pub sequence: u32,
    /// Shot number within the sequence (the `SH` part)
    pub shot: u32,
}

impl ShotNumber {
    /// Parse a conventional shot name; `None` for anything off convention
    pub fn parse(name: &str) -> Option<Self> {
        let (sequence, shot) = name.split_once('_')?;
        let sequence = sequence.strip_prefix("SQ")?;
        let shot = shot.strip_prefix("SH")?;
        if sequence.len() != 4 || shot.len() != 4 {
            return None;
        }
        Some(Self {
            sequence: sequence.parse().ok()?,
            shot: shot.parse().ok()?,
        })
    }

    /// Render back to the `SQ####_SH####` convention
    pub fn format(&self) -> String {
        format!("SQ{:04}_SH{:04}", self.sequence, self.shot)
    }
}

/// Numbering convention for generated shot names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingRules {
    /// Increment between consecutive shot numbers
    pub shot_step: u32,
    /// Highest shot number before rolling into the next sequence
    pub shot_cap: u32,
    /// Increment between consecutive sequence numbers
    pub sequence_step: u32,
    /// Sequence number used while the timeline is empty
    pub default_sequence: u32,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            shot_step: 10,
            shot_cap: 9990,
            sequence_step: 10,
            default_sequence: 10,
        }
    }
}

impl NamingRules {
    /// Next canonical shot name for the timeline's active sequence.
    ///
    /// The active sequence is the one the first conventional shot
    /// belongs to. Deterministic and idempotent: two calls without a
    /// timeline mutation in between return the same name.
    pub fn next_shot_name(&self, timeline: &Timeline) -> String {
        let numbers: Vec<ShotNumber> = timeline
            .shots()
            .filter_map(|shot| ShotNumber::parse(&shot.name))
            .collect();
        let Some(first) = numbers.first() else {
            return ShotNumber {
                sequence: self.default_sequence,
                shot: self.shot_step,
            }
            .format();
        };

        let sequence = first.sequence;
        let highest = numbers
            .iter()
            .filter(|number| number.sequence == sequence)
            .map(|number| number.shot)
            .max()
            .unwrap_or(0);
        if highest >= self.shot_cap {
            return ShotNumber {
                sequence: sequence + self.sequence_step,
                shot: self.shot_step,
            }
            .format();
        }
        ShotNumber {
            sequence,
            shot: highest + self.shot_step,
        }
        .format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::DEFAULT_PALETTE;

    fn timeline_with_names(names: &[&str]) -> Timeline {
        let mut timeline = Timeline::new();
        for name in names {
            timeline
                .create_shot(*name, DEFAULT_PALETTE[0], 24, camera_name_for(name), None)
                .unwrap();
        }
        timeline
    }

    #[test]
    fn test_parse_conventional_name() {
        let number = ShotNumber::parse("SQ0010_SH0020").unwrap();
        assert_eq!(number.sequence, 10);
        assert_eq!(number.shot, 20);
        assert_eq!(number.format(), "SQ0010_SH0020");
    }

    #[test]
    fn test_parse_rejects_off_convention_names() {
        assert!(ShotNumber::parse("SH0010_SQ0010").is_none());
        assert!(ShotNumber::parse("SQ10_SH10").is_none());
        assert!(ShotNumber::parse("SQ0010-SH0010").is_none());
        assert!(ShotNumber::parse("SQ00a0_SH0010").is_none());
        assert!(ShotNumber::parse("establishing_wide").is_none());
    }

    #[test]
    fn test_empty_timeline_seeds_the_default_sequence() {
        let rules = NamingRules::default();
        assert_eq!(rules.next_shot_name(&Timeline::new()), "SQ0010_SH0010");
    }

    #[test]
    fn test_next_name_steps_past_the_highest_shot() {
        let rules = NamingRules::default();
        let timeline = timeline_with_names(&["SQ0010_SH0010", "SQ0010_SH0020"]);
        assert_eq!(rules.next_shot_name(&timeline), "SQ0010_SH0030");
    }

    #[test]
    fn test_next_name_ignores_foreign_names() {
        let rules = NamingRules::default();
        let timeline = timeline_with_names(&["SQ0010_SH0010", "layout_test"]);
        assert_eq!(rules.next_shot_name(&timeline), "SQ0010_SH0020");
    }

    #[test]
    fn test_cap_rolls_into_the_next_sequence() {
        let rules = NamingRules::default();
        let timeline = timeline_with_names(&["SQ0010_SH9990"]);
        assert_eq!(rules.next_shot_name(&timeline), "SQ0020_SH0010");
    }

    #[test]
    fn test_next_name_is_idempotent_without_mutation() {
        let rules = NamingRules::default();
        let timeline = timeline_with_names(&["SQ0010_SH0010"]);
        assert_eq!(rules.next_shot_name(&timeline), rules.next_shot_name(&timeline));
    }

    #[test]
    fn test_camera_name_prefix() {
        assert_eq!(camera_name_for("SQ0010_SH0010"), "CAM_SQ0010_SH0010");
    }
}

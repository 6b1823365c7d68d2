// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shot timeline engine for Shotline.
//!
//! This crate provides the in-memory shot timeline of the sequencer:
//! - Named, colored, frame-ranged shots with camera references
//! - Range invariants for create/delete/resize
//! - Gap closing and reopening ("linking"/"unstacking")
//! - Focus navigation and viewport range computation
//! - Canonical `SQ####_SH####` shot and camera naming
//! - Exportable sequence records
//!
//! ## Architecture
//!
//! The engine is pure and host-agnostic: every camera or viewport side
//! effect is computed here and applied by the embedding session layer.

pub mod export;
pub mod focus;
pub mod naming;
pub mod reflow;
pub mod shot;
pub mod timeline;

pub use export::{SequenceManifest, ShotRecord, CUT_IN_FRAME};
pub use focus::{widen_plan, FocusCursor};
pub use naming::{camera_name_for, NamingRules, ShotNumber, CAMERA_PREFIX};
pub use reflow::{close_gaps, reopen_gaps, ShotShift};
pub use shot::{FrameSpan, Shot, ShotColor, ShotId, DEFAULT_PALETTE};
pub use timeline::{Timeline, TimelineError, DEFAULT_ORIGIN};

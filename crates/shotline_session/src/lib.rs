// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequencer session façade for Shotline.
//!
//! This crate is the layer a UI or host integration talks to:
//! - [`SequencerSession`] owns one timeline and its focus cursor and
//!   exposes the full command surface (create, delete, resize, focus,
//!   link/unstack, export, playblast)
//! - [`HostBridge`] is the boundary to the host animation application;
//!   cameras and viewports are referenced by name only and every call
//!   across the boundary may fail without corrupting the timeline
//! - [`SequencerSettings`] carries the session defaults (shot length,
//!   numbering convention, palette) with RON persistence

pub mod export;
pub mod host;
pub mod session;
pub mod settings;

pub use export::{render_csv, render_json, CSV_HEADER};
pub use host::{HostBridge, HostError};
pub use session::{CreateShot, SequencerSession, SessionError};
pub use settings::{SequencerSettings, SETTINGS_FILE_NAME, SETTINGS_FORMAT_VERSION};

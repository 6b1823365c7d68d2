// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host application boundary.
//!
//! The sequencer never touches the host scene directly; every camera,
//! viewport, or file side effect goes through [`HostBridge`]. Host
//! objects are referenced by name only, so any call can find its
//! target missing. That is a collaborator error, never a core
//! invariant violation, and the session reports it as such.

use shotline_sequencer::{FrameSpan, ShotRecord};
use std::path::Path;

/// Error reported by a host collaborator
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Referenced camera does not exist in the host scene
    #[error("Camera not found in host scene: {0}")]
    MissingCamera(String),

    /// No viewport/playback surface is available
    #[error("No host viewport available")]
    MissingViewport,

    /// Host-side file output failed
    #[error("Host file output failed: {0}")]
    Io(String),
}

/// Operations the host application performs on the sequencer's behalf
pub trait HostBridge {
    /// Current playback range of the host viewport
    fn playback_range(&self) -> Result<FrameSpan, HostError>;

    /// Set the playback range of the host viewport
    fn set_playback_range(&mut self, span: FrameSpan) -> Result<(), HostError>;

    /// Move the playhead
    fn go_to_frame(&mut self, frame: i64) -> Result<(), HostError>;

    /// Create a camera for a new shot
    fn create_camera(&mut self, name: &str) -> Result<(), HostError>;

    /// Delete a shot's camera
    fn delete_camera(&mut self, name: &str) -> Result<(), HostError>;

    /// Shift a camera's animation keys in time
    fn offset_camera(&mut self, name: &str, frames: i64) -> Result<(), HostError>;

    /// Render a preview for one shot
    fn playblast_shot(&mut self, record: &ShotRecord) -> Result<(), HostError>;

    /// Export a camera into the output folder
    fn export_camera(&mut self, name: &str, folder: &Path) -> Result<(), HostError>;

    /// Write an export file into the output folder
    fn write_file(
        &mut self,
        folder: &Path,
        file_name: &str,
        contents: &str,
    ) -> Result<(), HostError>;
}

/// In-memory host double that records every call it receives
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) range: Option<FrameSpan>,
    pub(crate) playhead: Option<i64>,
    pub(crate) cameras: Vec<String>,
    pub(crate) missing: Vec<String>,
    pub(crate) files: Vec<(String, String)>,
    pub(crate) calls: Vec<String>,
}

#[cfg(test)]
impl RecordingHost {
    fn check_camera(&self, name: &str) -> Result<(), HostError> {
        if self.missing.iter().any(|missing| missing == name) {
            return Err(HostError::MissingCamera(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
impl HostBridge for RecordingHost {
    fn playback_range(&self) -> Result<FrameSpan, HostError> {
        self.range.ok_or(HostError::MissingViewport)
    }

    fn set_playback_range(&mut self, span: FrameSpan) -> Result<(), HostError> {
        self.range = Some(span);
        self.calls.push(format!("set_range {}..{}", span.start, span.end));
        Ok(())
    }

    fn go_to_frame(&mut self, frame: i64) -> Result<(), HostError> {
        self.playhead = Some(frame);
        self.calls.push(format!("go_to {frame}"));
        Ok(())
    }

    fn create_camera(&mut self, name: &str) -> Result<(), HostError> {
        self.cameras.push(name.to_string());
        self.calls.push(format!("create_camera {name}"));
        Ok(())
    }

    fn delete_camera(&mut self, name: &str) -> Result<(), HostError> {
        self.check_camera(name)?;
        self.cameras.retain(|camera| camera != name);
        self.calls.push(format!("delete_camera {name}"));
        Ok(())
    }

    fn offset_camera(&mut self, name: &str, frames: i64) -> Result<(), HostError> {
        self.check_camera(name)?;
        self.calls.push(format!("offset_camera {name} {frames}"));
        Ok(())
    }

    fn playblast_shot(&mut self, record: &ShotRecord) -> Result<(), HostError> {
        self.check_camera(&record.camera)?;
        self.calls.push(format!("playblast {}", record.name));
        Ok(())
    }

    fn export_camera(&mut self, name: &str, _folder: &Path) -> Result<(), HostError> {
        self.check_camera(name)?;
        self.calls.push(format!("export_camera {name}"));
        Ok(())
    }

    fn write_file(
        &mut self,
        _folder: &Path,
        file_name: &str,
        contents: &str,
    ) -> Result<(), HostError> {
        self.files
            .push((file_name.to_string(), contents.to_string()));
        self.calls.push(format!("write_file {file_name}"));
        Ok(())
    }
}

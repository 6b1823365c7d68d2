// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editing session façade over the shot timeline.
//!
//! [`SequencerSession`] is the single entry point a UI layer calls. It
//! owns the timeline and the focus cursor for the lifetime of one
//! editing session, translates commands into timeline mutations, and
//! relays the resulting side effects (camera shifts, viewport ranges,
//! playblasts, export files) to the host collaborator. A failed
//! command leaves the timeline untouched; host failures on tolerated
//! side effects are logged and reported, never escalated into core
//! state corruption.

use crate::export;
use crate::host::{HostBridge, HostError};
use crate::settings::SequencerSettings;
use shotline_sequencer::{
    camera_name_for, close_gaps, reopen_gaps, widen_plan, FocusCursor, FrameSpan,
    SequenceManifest, ShotColor, ShotId, ShotNumber, ShotShift, Timeline, TimelineError,
    DEFAULT_PALETTE,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Error from a session command
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Core timeline rejection
    #[error(transparent)]
    Timeline(#[from] TimelineError),

    /// Host collaborator failure
    #[error(transparent)]
    Host(#[from] HostError),

    /// Export serialization failure
    #[error("Export serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Per-shot creation parameters; unset fields fall back to the
/// session defaults
#[derive(Debug, Clone, Default)]
pub struct CreateShot {
    /// Explicit shot name; derived from the naming convention when unset
    pub name: Option<String>,
    /// Display color; taken from the palette when unset
    pub color: Option<ShotColor>,
    /// Length in frames; the configured default when unset
    pub length: Option<i64>,
    /// Camera name; `CAM_` + shot name when unset
    pub camera: Option<String>,
}

/// One editing session over a single timeline
pub struct SequencerSession<H: HostBridge> {
    timeline: Timeline,
    cursor: FocusCursor,
    settings: SequencerSettings,
    host: H,
}

impl<H: HostBridge> SequencerSession<H> {
    /// Start a session with the given host and settings
    pub fn new(host: H, settings: SequencerSettings) -> Self {
        Self {
            timeline: Timeline::with_origin(settings.first_frame),
            cursor: FocusCursor::new(),
            settings,
            host,
        }
    }

    /// The timeline being edited
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The focus cursor
    pub fn cursor(&self) -> &FocusCursor {
        &self.cursor
    }

    /// The session settings
    pub fn settings(&self) -> &SequencerSettings {
        &self.settings
    }

    /// The host collaborator
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Create a shot after the active one, defaulting every unset
    /// field, and make it the new active shot. The matching host
    /// camera is created best-effort.
    pub fn create_shot(&mut self, params: CreateShot) -> Result<ShotId, SessionError> {
        let name = match params.name {
            Some(name) => {
                if ShotNumber::parse(&name).is_none() {
                    warn!(name = %name, "shot name is off the SQ####_SH#### convention");
                }
                name
            }
            None => self.settings.naming.next_shot_name(&self.timeline),
        };
        let camera = params.camera.unwrap_or_else(|| camera_name_for(&name));
        let length = params.length.unwrap_or(self.settings.default_shot_length);
        let color = params.color.unwrap_or_else(|| self.next_palette_color());

        let id = self.timeline.create_shot(
            name.clone(),
            color,
            length,
            camera.clone(),
            self.cursor.active(),
        )?;
        self.cursor.set(id);

        if let Err(err) = self.host.create_camera(&camera) {
            warn!(error = %err, camera = %camera, "host could not create the shot camera");
        }
        info!(shot = %name, camera = %camera, "created shot");
        Ok(id)
    }

    /// Delete the active shot, retarget the cursor, and drop the
    /// shot's host camera best-effort
    pub fn delete_active_shot(&mut self) -> Result<(), SessionError> {
        let id = self.cursor.active().ok_or(TimelineError::NotFound)?;
        let index = self.timeline.index_of(id).ok_or(TimelineError::NotFound)?;
        let shot = self.timeline.delete_shot(id)?;
        self.cursor.retarget_after_delete(&self.timeline, index);

        if let Err(err) = self.host.delete_camera(&shot.camera) {
            warn!(error = %err, camera = %shot.camera, "host could not delete the shot camera");
        }
        info!(shot = %shot.name, "deleted shot");
        Ok(())
    }

    /// Grow or shrink the active shot's end by `delta` frames
    pub fn resize_active(&mut self, delta: i64) -> Result<FrameSpan, SessionError> {
        let id = self.cursor.active().ok_or(TimelineError::NotFound)?;
        let span = self.timeline.resize(id, delta)?;
        debug!(delta, "resized active shot");
        Ok(span)
    }

    /// Move the cursor forward and frame the shot it lands on.
    /// Silent no-op at the end of the timeline.
    pub fn focus_next(&mut self) -> Result<(), SessionError> {
        if self.cursor.focus_next(&self.timeline) {
            self.frame_active()?;
        }
        Ok(())
    }

    /// Move the cursor backward and frame the shot it lands on.
    /// Silent no-op at the start of the timeline.
    pub fn focus_previous(&mut self) -> Result<(), SessionError> {
        if self.cursor.focus_previous(&self.timeline) {
            self.frame_active()?;
        }
        Ok(())
    }

    /// Tighten the host viewport to the active shot's range
    pub fn focus_active_shot(&mut self) -> Result<(), SessionError> {
        let span = self
            .cursor
            .active_span(&self.timeline)
            .ok_or(TimelineError::NotFound)?;
        self.host.set_playback_range(span)?;
        Ok(())
    }

    /// Widen the host viewport: frame the whole sequence, or pad the
    /// current range further once the sequence is already in view
    pub fn defocus_active_shot(&mut self) -> Result<(), SessionError> {
        let current = self.host.playback_range()?;
        let Some(target) = widen_plan(
            &self.timeline,
            &self.cursor,
            current,
            self.settings.defocus_padding,
        ) else {
            return Ok(());
        };
        self.host.set_playback_range(target)?;
        Ok(())
    }

    /// Close every gap between adjacent shots, moving each shifted
    /// shot's camera along with it. Returns the number of shots moved.
    pub fn link_shots(&mut self) -> Result<usize, SessionError> {
        let shifts = close_gaps(&mut self.timeline);
        self.relay_shifts(&shifts);
        info!(moved = shifts.len(), "closed gaps between shots");
        Ok(shifts.len())
    }

    /// Reopen previously closed gaps, moving cameras back with their
    /// shots. Returns the number of shots moved.
    pub fn unstack_shots(&mut self) -> Result<usize, SessionError> {
        let shifts = reopen_gaps(&mut self.timeline);
        self.relay_shifts(&shifts);
        info!(moved = shifts.len(), "reopened gaps between shots");
        Ok(shifts.len())
    }

    /// Export the ordered sequence data (JSON manifest, tracking CSV,
    /// and one camera per shot) through the host into `folder`
    pub fn export_sequence_data(
        &mut self,
        folder: &Path,
    ) -> Result<SequenceManifest, SessionError> {
        let manifest = SequenceManifest::from_timeline(&self.timeline);
        let json = export::render_json(&manifest)?;
        let csv = export::render_csv(&manifest);

        self.host.write_file(folder, "shots.json", &json)?;
        self.host.write_file(folder, "shots.csv", &csv)?;
        for record in &manifest.shots {
            if let Err(err) = self.host.export_camera(&record.camera, folder) {
                warn!(error = %err, camera = %record.camera, "camera export skipped");
            }
        }

        info!(shots = manifest.shots.len(), "exported sequence data");
        Ok(manifest)
    }

    /// Render a preview for every shot in ascending order. Shots whose
    /// camera the host cannot find are skipped; returns the number of
    /// shots actually rendered.
    pub fn playblast(&mut self) -> Result<usize, SessionError> {
        let manifest = SequenceManifest::from_timeline(&self.timeline);
        let mut rendered = 0;
        for record in &manifest.shots {
            match self.host.playblast_shot(record) {
                Ok(()) => rendered += 1,
                Err(err) => warn!(error = %err, shot = %record.name, "playblast skipped"),
            }
        }
        info!(rendered, total = manifest.shots.len(), "playblast finished");
        Ok(rendered)
    }

    fn frame_active(&mut self) -> Result<(), SessionError> {
        if let Some(span) = self.cursor.active_span(&self.timeline) {
            self.host.set_playback_range(span)?;
            self.host.go_to_frame(span.start)?;
        }
        Ok(())
    }

    fn relay_shifts(&mut self, shifts: &[ShotShift]) {
        for shift in shifts {
            if let Err(err) = self.host.offset_camera(&shift.camera, shift.offset) {
                warn!(error = %err, camera = %shift.camera, "camera did not follow its shot");
            }
        }
    }

    fn next_palette_color(&self) -> ShotColor {
        let palette = &self.settings.palette;
        if palette.is_empty() {
            return DEFAULT_PALETTE[0];
        }
        palette[self.timeline.len() % palette.len()]
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Session configuration.

use serde::{Deserialize, Serialize};
use shotline_sequencer::{NamingRules, ShotColor, DEFAULT_PALETTE};
use std::path::{Path, PathBuf};

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "sequencer.shotline";

/// Tunable defaults for one editing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerSettings {
    /// Settings format version
    pub version: u32,
    /// First frame used for the first shot
    pub first_frame: i64,
    /// Length of newly created shots, in frames
    pub default_shot_length: i64,
    /// Frames added on each side when widening the viewport
    pub defocus_padding: i64,
    /// Shot/camera numbering convention
    pub naming: NamingRules,
    /// Colors cycled through for new shots
    #[serde(default = "default_palette")]
    pub palette: Vec<ShotColor>,
}

fn default_palette() -> Vec<ShotColor> {
    DEFAULT_PALETTE.to_vec()
}

impl Default for SequencerSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            first_frame: 1,
            default_shot_length: 24,
            defocus_padding: 24,
            naming: NamingRules::default(),
            palette: default_palette(),
        }
    }
}

impl SequencerSettings {
    /// Load settings from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: SequencerSettings = ron::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        // Version check
        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Settings version {} is newer than supported version {}",
                    settings.version, SETTINGS_FORMAT_VERSION
                ),
            ));
        }

        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        let content = ron::ser::to_string_pretty(self, config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        std::fs::write(path, content)
    }

    /// Settings file path inside a project folder
    pub fn settings_file_path(folder: &Path) -> PathBuf {
        folder.join(SETTINGS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SequencerSettings::default();
        assert_eq!(settings.version, SETTINGS_FORMAT_VERSION);
        assert_eq!(settings.default_shot_length, 24);
        assert_eq!(settings.defocus_padding, 24);
        assert!(!settings.palette.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut settings = SequencerSettings::default();
        settings.default_shot_length = 48;

        let ron_str =
            ron::ser::to_string_pretty(&settings, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: SequencerSettings = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded.default_shot_length, 48);
        assert_eq!(loaded.naming.shot_step, 10);
    }

    #[test]
    fn test_newer_format_version_is_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!(
            "shotline_settings_{}.ron",
            std::process::id()
        ));

        let mut settings = SequencerSettings::default();
        settings.version = SETTINGS_FORMAT_VERSION + 1;
        settings.save(&path).unwrap();

        let err = SequencerSettings::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        std::fs::remove_file(&path).ok();
    }
}

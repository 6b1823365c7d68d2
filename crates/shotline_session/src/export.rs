// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rendering of exported sequence data.

use shotline_sequencer::SequenceManifest;

/// Header row of the production tracking CSV
pub const CSV_HEADER: &str = "Sequence;Shot Code;Status;Cut In;Cut Out;Cut Duration;Task Template";

const CSV_STATUS: &str = "wtg";
const CSV_TASK_TEMPLATE: &str = "Shot";

/// Render the manifest as a pretty-printed JSON document
pub fn render_json(manifest: &SequenceManifest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(manifest)
}

/// Render the manifest as the semicolon-separated production tracking CSV
pub fn render_csv(manifest: &SequenceManifest) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in &manifest.shots {
        out.push_str(&format!(
            "{};{};{};{};{};{};{}\n",
            record.sequence,
            record.name,
            CSV_STATUS,
            record.cut_in,
            record.cut_out,
            record.length,
            CSV_TASK_TEMPLATE
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotline_sequencer::{Timeline, DEFAULT_PALETTE};

    fn manifest() -> SequenceManifest {
        let mut timeline = Timeline::new();
        timeline
            .create_shot("SQ0020_SH0010", DEFAULT_PALETTE[0], 24, "CAM_SQ0020_SH0010", None)
            .unwrap();
        SequenceManifest::from_timeline(&timeline)
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_shot() {
        let csv = render_csv(&manifest());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "SQ0020;SQ0020_SH0010;wtg;1001;1025;24;Shot");
    }

    #[test]
    fn test_json_round_trips_through_serde() {
        let json = render_json(&manifest()).unwrap();
        let parsed: SequenceManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sequence, "SQ0020");
        assert_eq!(parsed.shots.len(), 1);
        assert_eq!(parsed.shots[0].camera, "CAM_SQ0020_SH0010");
    }
}

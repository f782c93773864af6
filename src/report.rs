use cuesheet::cue::models::{CueSheet, CueTrack};
use cuesheet::cue::span::TrackSpan;
use cuesheet::cue::time::ms_to_cue_time;
use serde::Serialize;
use std::fmt;
use std::path::Path;

const UNKNOWN: &str = "-";

/// Text listing of a sheet's metadata, files and tracks.
pub struct SheetSummary<'a> {
    pub path: &'a Path,
    pub sheet: &'a CueSheet,
}

impl fmt::Display for SheetSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sheet = self.sheet;

        writeln!(f, "{}", self.path.display())?;
        writeln!(f, "  Title:      {}", or_unknown(&sheet.title))?;
        writeln!(f, "  Performer:  {}", or_unknown(&sheet.performer))?;
        if let Some(songwriter) = &sheet.songwriter {
            writeln!(f, "  Songwriter: {songwriter}")?;
        }
        if let Some(catalog) = &sheet.catalog {
            writeln!(f, "  Catalog:    {catalog}")?;
        }

        let orphans: Vec<&CueTrack> = sheet.tracks.iter().filter(|t| t.file.is_none()).collect();
        if !orphans.is_empty() {
            writeln!(f, "  Tracks without a FILE:")?;
            for track in orphans {
                write_track(f, sheet, track)?;
            }
        }

        for file in &sheet.files {
            writeln!(
                f,
                "  FILE {} ({})",
                file.file_name,
                or_unknown(&file.file_type)
            )?;
            for track in sheet.tracks_of(file) {
                write_track(f, sheet, track)?;
            }
        }

        Ok(())
    }
}

fn write_track(f: &mut fmt::Formatter<'_>, sheet: &CueSheet, track: &CueTrack) -> fmt::Result {
    write!(
        f,
        "    {:02} [{}] {}  {} / {}",
        track.number,
        ms_to_cue_time(track.start_ms),
        or_unknown(&track.track_type),
        or_unknown(&track.title),
        sheet.effective_performer(track).unwrap_or(UNKNOWN),
    )?;
    if track.pregap_ms > 0 {
        write!(f, "  pregap {}", ms_to_cue_time(track.pregap_ms))?;
    }
    if track.postgap_ms > 0 {
        write!(f, "  postgap {}", ms_to_cue_time(track.postgap_ms))?;
    }
    writeln!(f)
}

/// Start, end and duration of every track.
pub struct SpanSummary<'a> {
    pub path: &'a Path,
    pub sheet: &'a CueSheet,
}

impl fmt::Display for SpanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path.display())?;

        for span in self.sheet.spans() {
            let track = &self.sheet.tracks[span.track];
            let file = self
                .sheet
                .file_of(track)
                .map(|file| file.file_name.as_str())
                .unwrap_or(UNKNOWN);

            writeln!(
                f,
                "  {:02}  {}  {} -> {}  ({})",
                track.number,
                file,
                ms_to_cue_time(span.start_ms),
                span.end_ms.map(ms_to_cue_time).as_deref().unwrap_or("end"),
                span.duration_ms()
                    .map(ms_to_cue_time)
                    .as_deref()
                    .unwrap_or(UNKNOWN),
            )?;
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SheetReport<'a> {
    pub path: &'a Path,
    pub sheet: &'a CueSheet,
    pub spans: Vec<TrackSpan>,
}

impl<'a> SheetReport<'a> {
    pub fn new(path: &'a Path, sheet: &'a CueSheet) -> Self {
        Self {
            path,
            sheet,
            spans: sheet.spans(),
        }
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuesheet::cue::parse;

    const SHEET: &str = r#"TITLE "My Album"
PERFORMER "Artist X"
FILE "album.wav" WAVE
  TRACK 01 AUDIO
    TITLE "Song One"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Song Two"
    PERFORMER "Guest"
    PREGAP 00:02:00
    INDEX 01 03:00:00
"#;

    #[test]
    fn summary_lists_files_and_tracks() {
        let sheet = parse(SHEET);
        let text = SheetSummary {
            path: Path::new("album.cue"),
            sheet: &sheet,
        }
        .to_string();

        assert!(text.starts_with("album.cue\n"));
        assert!(text.contains("  Title:      My Album\n"));
        assert!(text.contains("  FILE album.wav (WAVE)\n"));
        assert!(text.contains("    01 [00:00:00] AUDIO  Song One / Artist X\n"));
        assert!(text.contains("    02 [03:00:00] AUDIO  Song Two / Guest  pregap 00:02:00\n"));
        assert!(!text.contains("Catalog"));
        assert!(!text.contains("without a FILE"));
    }

    #[test]
    fn summary_shows_tracks_without_file() {
        let sheet = parse("TRACK 07 AUDIO");
        let text = SheetSummary {
            path: Path::new("x.cue"),
            sheet: &sheet,
        }
        .to_string();

        assert!(text.contains("  Tracks without a FILE:\n    07 [00:00:00] AUDIO  - / -\n"));
    }

    #[test]
    fn spans_show_end_and_duration() {
        let sheet = parse(SHEET);
        let text = SpanSummary {
            path: Path::new("album.cue"),
            sheet: &sheet,
        }
        .to_string();

        assert!(text.contains("  01  album.wav  00:00:00 -> 03:00:00  (03:00:00)\n"));
        assert!(text.contains("  02  album.wav  03:00:00 -> end  (-)\n"));
    }

    #[test]
    fn json_report_contains_sheet_and_spans() {
        let sheet = parse(SHEET);
        let report = SheetReport::new(Path::new("album.cue"), &sheet);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["path"], "album.cue");
        assert_eq!(value["sheet"]["title"], "My Album");
        assert_eq!(value["sheet"]["files"][0]["file_name"], "album.wav");
        assert_eq!(value["sheet"]["tracks"][1]["start_ms"], 180_000);
        assert_eq!(value["sheet"]["tracks"][0]["performer"], serde_json::Value::Null);
        assert_eq!(value["spans"][0]["end_ms"], 180_000);
    }
}

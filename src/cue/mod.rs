use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueFile, CueSheet, CueTrack};
use crate::cue::time::cue_time_to_ms;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod error;
pub mod models;
pub mod span;
pub mod text;
pub mod time;

const DEFAULT_INDEX_TIME: &str = "00:00:00";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref QUOTED_FILE: Regex = Regex::new(r#"^"([^"]*)"\s*(\S+)?"#).unwrap();
}

/// Loads and parses a CUE sheet from disk.
pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.cue_path
    }

    pub async fn parse(&self) -> CueResult<CueSheet> {
        let data = tokio::fs::read(&self.cue_path)
            .await
            .map_err(|source| CueError::ReadError {
                path: self.cue_path.clone(),
                source,
            })?;

        let (text, encoding) = text::decode(&data);
        debug!(
            "Read {} bytes from {:?} as {encoding}",
            data.len(),
            self.cue_path
        );

        let sheet = parse(&text);
        debug!(
            "Parsed {:?}: {} file(s), {} track(s)",
            self.cue_path,
            sheet.files.len(),
            sheet.tracks.len()
        );

        Ok(sheet)
    }
}

impl FromStr for CueSheet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

/// Parses CUE sheet text.
///
/// Never fails: unknown commands are skipped, malformed numbers and
/// timecodes become zero and directives without an open track either fall
/// back to the sheet (TITLE, PERFORMER, SONGWRITER) or are dropped.
pub fn parse(text: &str) -> CueSheet {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut sheet = CueSheet::default();
    let mut current_file: Option<usize> = None;
    let mut current_track: Option<usize> = None;

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line));

    for line in lines {
        let line = WHITESPACE.replace_all(line, " ");
        let (command, arg) = match line.split_once(' ') {
            Some((command, rest)) => (command, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (&*line, None),
        };

        match command.to_uppercase().as_str() {
            "TITLE" => {
                let value = unquote(arg);
                match current_track {
                    Some(i) => sheet.tracks[i].title = value,
                    None => sheet.title = value,
                }
            }
            "PERFORMER" => {
                let value = unquote(arg);
                match current_track {
                    Some(i) => sheet.tracks[i].performer = value,
                    None => sheet.performer = value,
                }
            }
            "SONGWRITER" => {
                let value = unquote(arg);
                match current_track {
                    Some(i) => sheet.tracks[i].songwriter = value,
                    None => sheet.songwriter = value,
                }
            }
            "CATALOG" => sheet.catalog = unquote(arg),
            "FILE" => {
                let (file_name, file_type) = parse_file(arg);
                sheet.files.push(CueFile {
                    file_name,
                    file_type,
                    tracks: Vec::new(),
                });
                current_file = Some(sheet.files.len() - 1);
                current_track = None;
            }
            "TRACK" => {
                let (number, track_type) = parse_track(arg);
                let index = sheet.tracks.len();
                sheet.tracks.push(CueTrack {
                    number,
                    track_type,
                    file: current_file,
                    ..Default::default()
                });
                if let Some(file) = current_file {
                    sheet.files[file].tracks.push(index);
                }
                current_track = Some(index);
            }
            "INDEX" => {
                let (number, time) = parse_index(arg);
                if let (1, Some(i)) = (number, current_track) {
                    sheet.tracks[i].start_ms = cue_time_to_ms(Some(time));
                }
            }
            "PREGAP" => {
                if let Some(i) = current_track {
                    sheet.tracks[i].pregap_ms = cue_time_to_ms(arg);
                }
            }
            "POSTGAP" => {
                if let Some(i) = current_track {
                    sheet.tracks[i].postgap_ms = cue_time_to_ms(arg);
                }
            }
            "ISRC" => {
                if let Some(i) = current_track {
                    sheet.tracks[i].isrc = unquote(arg);
                }
            }
            _ => {}
        }
    }

    sheet
}

fn is_comment(line: &str) -> bool {
    line.get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("REM"))
}

/// Strips one leading and one trailing double quote, each only if present.
pub fn unquote(value: Option<&str>) -> Option<String> {
    let value = value?;
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    Some(value.to_string())
}

/// Splits a FILE argument into file name and optional type.
pub fn parse_file(arg: Option<&str>) -> (String, Option<String>) {
    let Some(arg) = arg else {
        return (String::new(), None);
    };

    if let Some(caps) = QUOTED_FILE.captures(arg) {
        return (
            caps[1].to_string(),
            caps.get(2).map(|m| m.as_str().to_string()),
        );
    }

    let mut parts = arg.split(' ');
    let name = parts.next().unwrap_or_default().to_string();
    let file_type = parts.next().map(str::to_string);
    (name, file_type)
}

/// Splits a TRACK argument into track number and optional type.
pub fn parse_track(arg: Option<&str>) -> (u32, Option<String>) {
    let Some(arg) = arg else {
        return (0, None);
    };

    let mut parts = arg.split(' ');
    let number = parts.next().and_then(|n| n.parse().ok()).unwrap_or(0);
    let track_type = parts.next().map(str::to_string);
    (number, track_type)
}

/// Splits an INDEX argument into index number and timecode.
pub fn parse_index(arg: Option<&str>) -> (u32, &str) {
    let Some(arg) = arg else {
        return (0, DEFAULT_INDEX_TIME);
    };

    let mut parts = arg.split(' ');
    let number = parts.next().and_then(|n| n.parse().ok()).unwrap_or(0);
    let time = parts.next().unwrap_or(DEFAULT_INDEX_TIME);
    (number, time)
}

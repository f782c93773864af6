// src/cue/models
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueSheet {
    pub files: Vec<CueFile>,
    pub tracks: Vec<CueTrack>,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueFile {
    pub file_name: String,
    pub file_type: Option<String>,
    /// Indices into [`CueSheet::tracks`], in appearance order.
    pub tracks: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueTrack {
    pub number: u32,
    pub track_type: Option<String>,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub isrc: Option<String>,
    pub start_ms: u64,
    pub pregap_ms: u64,
    pub postgap_ms: u64,
    /// Index into [`CueSheet::files`]. `None` when the track precedes every FILE.
    pub file: Option<usize>,
}

impl CueSheet {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.tracks.is_empty()
    }

    pub fn tracks_of<'a>(&'a self, file: &'a CueFile) -> impl Iterator<Item = &'a CueTrack> + 'a {
        file.tracks.iter().filter_map(|&i| self.tracks.get(i))
    }

    pub fn file_of(&self, track: &CueTrack) -> Option<&CueFile> {
        track.file.and_then(|i| self.files.get(i))
    }

    pub fn track_by_number(&self, number: u32) -> Option<&CueTrack> {
        self.tracks.iter().find(|t| t.number == number)
    }

    /// Performer of the track, or the disc performer when the track has none.
    pub fn effective_performer<'a>(&'a self, track: &'a CueTrack) -> Option<&'a str> {
        track
            .performer
            .as_deref()
            .or(self.performer.as_deref())
    }
}

use crate::cue::models::CueSheet;
use serde::Serialize;

/// Where a logical track sits inside its physical audio file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackSpan {
    /// Index into [`CueSheet::tracks`].
    pub track: usize,
    pub file: Option<usize>,
    pub start_ms: u64,
    /// Start of the next track in the same file. `None` for the last one,
    /// which runs to the end of the audio.
    pub end_ms: Option<u64>,
}

impl TrackSpan {
    pub fn duration_ms(&self) -> Option<u64> {
        self.end_ms.map(|end| end.saturating_sub(self.start_ms))
    }
}

impl CueSheet {
    pub fn spans(&self) -> Vec<TrackSpan> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let end_ms = self.tracks[i + 1..]
                    .iter()
                    .find(|next| next.file == track.file)
                    .map(|next| next.start_ms);

                TrackSpan {
                    track: i,
                    file: track.file,
                    start_ms: track.start_ms,
                    end_ms,
                }
            })
            .collect()
    }
}

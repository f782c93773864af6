pub const FRAMES_PER_SECOND: u64 = 75;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MS_PER_SECOND: u64 = 1000;

/// Converts an `MM:SS:FF` timecode (75 frames per second) to milliseconds.
///
/// Every component defaults to zero on its own when it is missing or not a
/// number, so `None`, `""` or `"xx:yy:zz"` all yield `0` and `"01:xx:00"`
/// still yields a minute.
pub fn cue_time_to_ms(time: Option<&str>) -> u64 {
    let Some(time) = time else {
        return 0;
    };

    let mut parts = time.split(':').map(|p| p.trim().parse::<u64>().unwrap_or(0));
    let minutes = parts.next().unwrap_or(0);
    let seconds = parts.next().unwrap_or(0);
    let frames = parts.next().unwrap_or(0);

    minutes
        .saturating_mul(SECONDS_PER_MINUTE)
        .saturating_add(seconds)
        .saturating_mul(MS_PER_SECOND)
        .saturating_add(frames.saturating_mul(MS_PER_SECOND) / FRAMES_PER_SECOND)
}

/// Renders milliseconds back to an `MM:SS:FF` timecode, truncating to whole frames.
pub fn ms_to_cue_time(ms: u64) -> String {
    let total_seconds = ms / MS_PER_SECOND;
    let minutes = total_seconds / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    let frames = (ms % MS_PER_SECOND) * FRAMES_PER_SECOND / MS_PER_SECOND;

    format!("{minutes:02}:{seconds:02}:{frames:02}")
}

use crate::midi_event::{RawEvent, TrackEvent};

/// Places one track's events on its own absolute tick axis.
pub fn accumulate_track(track: &[TrackEvent]) -> Vec<RawEvent> {
    let mut ticks: u64 = 0;
    track
        .iter()
        .map(|event| {
            ticks += u64::from(event.delta_time);
            RawEvent {
                absolute_ticks: ticks,
                kind: event.kind,
            }
        })
        .collect()
}

/// Merges every track into one timeline ordered by absolute tick.
///
/// Events on the same tick keep their concatenation order (track order,
/// then in-track order), so pairing of simultaneous voices is reproducible.
pub fn merge_tracks(tracks: &[Vec<TrackEvent>]) -> Vec<RawEvent> {
    let mut merged: Vec<RawEvent> = tracks
        .iter()
        .flat_map(|track| accumulate_track(track))
        .collect();
    // sort_by_key is stable
    merged.sort_by_key(|event| event.absolute_ticks);
    merged
}

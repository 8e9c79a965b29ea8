use crate::midi_event::{EventKind, RawEvent, TrackEvent};

// microseconds per minute
const MICROS_PER_MIN: f64 = 60_000_000.0;
pub const DEFAULT_BPM: f64 = 120.0;
pub const DEFAULT_TICKS_PER_BEAT: u16 = 480;

/// How tempo meta events drive the tick-to-seconds conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TempoMode {
    /// The first tempo event found holds for the whole piece.
    #[default]
    First,
    /// Every tempo change takes effect from its own tick onwards.
    Map,
}

pub fn bpm_from_micros(micros_per_qn: u32) -> f64 {
    MICROS_PER_MIN / f64::from(micros_per_qn)
}

/// Header resolution, falling back to 480 when it is missing or zero.
pub fn resolve_ticks_per_beat(ticks_per_beat: Option<u16>) -> u16 {
    ticks_per_beat
        .filter(|&tpb| tpb > 0)
        .unwrap_or(DEFAULT_TICKS_PER_BEAT)
}

/// BPM of the first tempo event, scanning track by track in file order.
///
/// Later tempo events are ignored. Returns 120 when there is none.
pub fn extract_bpm(tracks: &[Vec<TrackEvent>]) -> f64 {
    tracks
        .iter()
        .flatten()
        .find_map(|event| match event.kind {
            // 0 us/qn has no finite bpm; skip it rather than freeze the clock
            EventKind::Tempo { micros_per_qn } if micros_per_qn > 0 => {
                Some(bpm_from_micros(micros_per_qn))
            }
            _ => None,
        })
        .unwrap_or(DEFAULT_BPM)
}

fn ticks_to_seconds(ticks: u64, bpm: f64, ticks_per_beat: f64) -> f64 {
    ticks as f64 * (60.0 / bpm) / ticks_per_beat
}

/// Converts a non-decreasing sequence of absolute ticks into seconds.
pub trait TickClock {
    /// Moves the clock forward to `absolute_ticks` and returns the elapsed seconds.
    fn advance_to(&mut self, absolute_ticks: u64) -> f64;
}

/// One tempo for the whole walk.
pub struct FixedTempoClock {
    bpm: f64,
    ticks_per_beat: f64,
    last_ticks: u64,
    elapsed_sec: f64,
}

impl FixedTempoClock {
    pub fn new(bpm: f64, ticks_per_beat: u16) -> Self {
        Self {
            bpm,
            ticks_per_beat: f64::from(ticks_per_beat),
            last_ticks: 0,
            elapsed_sec: 0.0,
        }
    }
}

impl TickClock for FixedTempoClock {
    fn advance_to(&mut self, absolute_ticks: u64) -> f64 {
        let delta_ticks = absolute_ticks.saturating_sub(self.last_ticks);
        self.elapsed_sec += ticks_to_seconds(delta_ticks, self.bpm, self.ticks_per_beat);
        self.last_ticks = absolute_ticks;
        self.elapsed_sec
    }
}

/// Integrates piecewise over every tempo change in the merged timeline.
pub struct TempoMapClock {
    changes: Vec<(u64, f64)>,
    next_change: usize,
    bpm: f64,
    ticks_per_beat: f64,
    last_ticks: u64,
    elapsed_sec: f64,
}

impl TempoMapClock {
    /// Collects tempo changes from an already merged, tick-ordered timeline.
    pub fn from_events(events: &[RawEvent], ticks_per_beat: u16) -> Self {
        let changes: Vec<(u64, f64)> = events
            .iter()
            .filter_map(|event| match event.kind {
                // same zero-tempo skip as extract_bpm
                EventKind::Tempo { micros_per_qn } if micros_per_qn > 0 => {
                    Some((event.absolute_ticks, bpm_from_micros(micros_per_qn)))
                }
                _ => None,
            })
            .collect();
        log::debug!("tempo map has {} changes", changes.len());

        Self {
            changes,
            next_change: 0,
            bpm: DEFAULT_BPM,
            ticks_per_beat: f64::from(ticks_per_beat),
            last_ticks: 0,
            elapsed_sec: 0.0,
        }
    }

    fn add_ticks_until(&mut self, ticks: u64) {
        let delta_ticks = ticks.saturating_sub(self.last_ticks);
        self.elapsed_sec += ticks_to_seconds(delta_ticks, self.bpm, self.ticks_per_beat);
        self.last_ticks = ticks;
    }
}

impl TickClock for TempoMapClock {
    fn advance_to(&mut self, absolute_ticks: u64) -> f64 {
        while let Some(&(change_ticks, bpm)) = self.changes.get(self.next_change) {
            if change_ticks > absolute_ticks {
                break;
            }
            self.add_ticks_until(change_ticks);
            self.bpm = bpm;
            self.next_change += 1;
        }
        self.add_ticks_until(absolute_ticks);
        self.elapsed_sec
    }
}

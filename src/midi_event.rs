use serde::Serialize;

/// Codec-independent view of a decoded Standard MIDI File.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedMidi {
    /// Pulses per quarter note from the header, if the codec reported one.
    pub ticks_per_beat: Option<u16>,
    pub tracks: Vec<Vec<TrackEvent>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent {
    /// Ticks since the previous event in the same track.
    pub delta_time: u32,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
    Tempo { micros_per_qn: u32 },
    Other,
}

/// An event placed on the track's absolute tick axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub absolute_ticks: u64,
    pub kind: EventKind,
}

/// A closed note: start time and length in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub time: f64,
    pub note_name: String,
    pub duration: f64,
}

impl TrackEvent {
    pub fn new(delta_time: u32, kind: EventKind) -> Self {
        Self { delta_time, kind }
    }

    pub fn note_on(delta_time: u32, note: u8, velocity: u8) -> Self {
        Self::new(delta_time, EventKind::NoteOn { note, velocity })
    }

    pub fn note_off(delta_time: u32, note: u8) -> Self {
        Self::new(delta_time, EventKind::NoteOff { note })
    }

    pub fn tempo(delta_time: u32, micros_per_qn: u32) -> Self {
        Self::new(delta_time, EventKind::Tempo { micros_per_qn })
    }
}

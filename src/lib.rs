//! Rebuilds a list of timed notes from a decoded Standard MIDI File.
//!
//! Tracks are merged onto one tick axis, ticks are converted to seconds and
//! note-on/note-off pairs become [`NoteEvent`]s with a start time, a pitch
//! name and a duration.

pub mod error;
pub mod formatter;
pub mod loader;
pub mod merge;
pub mod midi_event;
pub mod output;
pub mod pitch;
pub mod reconstructor;
pub mod tempo;

pub use merge::merge_tracks;
pub use midi_event::{DecodedMidi, EventKind, NoteEvent, RawEvent, TrackEvent};
pub use pitch::note_name;
pub use reconstructor::{reconstruct, reconstruct_with, Reconstructor};
pub use tempo::{extract_bpm, FixedTempoClock, TempoMapClock, TempoMode, TickClock};

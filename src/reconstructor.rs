use std::collections::HashMap;

use crate::merge::merge_tracks;
use crate::midi_event::{DecodedMidi, EventKind, NoteEvent, RawEvent};
use crate::pitch::note_name;
use crate::tempo::{
    extract_bpm, resolve_ticks_per_beat, FixedTempoClock, TempoMapClock, TempoMode, TickClock,
};

/// Rebuilds the note list of a decoded file using a single global tempo.
pub fn reconstruct(midi: &DecodedMidi) -> Vec<NoteEvent> {
    reconstruct_with(midi, TempoMode::First)
}

pub fn reconstruct_with(midi: &DecodedMidi, mode: TempoMode) -> Vec<NoteEvent> {
    let ticks_per_beat = resolve_ticks_per_beat(midi.ticks_per_beat);
    let events = merge_tracks(&midi.tracks);
    log::debug!(
        "{} events across {} tracks, {} ticks per beat",
        events.len(),
        midi.tracks.len(),
        ticks_per_beat
    );

    match mode {
        TempoMode::First => {
            let bpm = extract_bpm(&midi.tracks);
            log::debug!("using fixed tempo of {} bpm", bpm);
            Reconstructor::new(FixedTempoClock::new(bpm, ticks_per_beat)).run(&events)
        }
        TempoMode::Map => {
            Reconstructor::new(TempoMapClock::from_events(&events, ticks_per_beat)).run(&events)
        }
    }
}

/// Walks a merged timeline once, pairing note-ons with their note-offs.
///
/// All walk state lives here and is consumed by [`Reconstructor::run`], so
/// one instance serves exactly one timeline.
pub struct Reconstructor<C: TickClock> {
    clock: C,
    current_time_sec: f64,
    // note number -> start time of the open note-on
    active_notes: HashMap<u8, f64>,
    notes: Vec<NoteEvent>,
}

impl<C: TickClock> Reconstructor<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            current_time_sec: 0.0,
            active_notes: HashMap::new(),
            notes: Vec::new(),
        }
    }

    /// Consumes a tick-ordered timeline and returns the closed notes by start time.
    pub fn run(mut self, events: &[RawEvent]) -> Vec<NoteEvent> {
        for event in events {
            self.process_event(event);
        }

        if !self.active_notes.is_empty() {
            log::debug!(
                "discarding {} notes that were never released",
                self.active_notes.len()
            );
        }

        // stable, so notes starting together stay in release order
        self.notes.sort_by(|a, b| a.time.total_cmp(&b.time));
        self.notes
    }

    fn process_event(&mut self, event: &RawEvent) {
        self.current_time_sec = self.clock.advance_to(event.absolute_ticks);

        match event.kind {
            EventKind::NoteOn { note, velocity } if velocity > 0 => self.handle_note_on(note),
            EventKind::NoteOn { note, .. } | EventKind::NoteOff { note } => {
                self.handle_note_off(note)
            }
            EventKind::Tempo { .. } | EventKind::Other => {}
        }
    }

    fn handle_note_on(&mut self, note: u8) {
        if let Some(start) = self.active_notes.insert(note, self.current_time_sec) {
            log::trace!("note {} restarted, dropping open note from {:.3}s", note, start);
        }
    }

    fn handle_note_off(&mut self, note: u8) {
        let Some(start) = self.active_notes.remove(&note) else {
            log::trace!("note-off for {} without a matching note-on", note);
            return;
        };

        self.notes.push(NoteEvent {
            time: start,
            note_name: note_name(note),
            duration: self.current_time_sec - start,
        });
    }
}

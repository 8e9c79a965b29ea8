//! Adapts a file decoded by `midi_file` into [`DecodedMidi`].

use midi_file::file::{Division, MetaEvent};
use midi_file::{core::Message, file::Event, MidiFile};

use crate::error::{Error, Result};
use crate::midi_event::{DecodedMidi, EventKind, TrackEvent};

/// Header time division, detached from the codec's types.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Timing {
    /// Pulses per quarter note.
    Metrical(u16),
    /// SMPTE frames, kept only for the error message.
    Timecode(String),
}

fn ticks_per_beat(timing: Timing) -> Result<u16> {
    match timing {
        Timing::Metrical(ppq) => {
            log::info!("quarter note division: {}", ppq);
            Ok(ppq)
        }
        Timing::Timecode(smpte) => Err(Error::UnsupportedDivision(smpte)),
    }
}

pub fn decode(midi_file: &MidiFile) -> Result<DecodedMidi> {
    let timing = match midi_file.header().division() {
        Division::QuarterNote(qtr) => Timing::Metrical(qtr.get()),
        Division::Smpte(smpte) => Timing::Timecode(format!("{:?}", smpte)),
    };
    let ticks_per_beat = ticks_per_beat(timing)?;

    let tracks: Vec<Vec<TrackEvent>> = midi_file
        .tracks()
        .map(|track| {
            track
                .events()
                .map(|track_event| TrackEvent {
                    delta_time: track_event.delta_time(),
                    kind: convert_event(track_event.event()),
                })
                .collect()
        })
        .collect();
    log::info!("decoded {} tracks", tracks.len());

    Ok(DecodedMidi {
        ticks_per_beat: Some(ticks_per_beat),
        tracks,
    })
}

fn convert_event(event: &Event) -> EventKind {
    match event {
        Event::Midi(Message::NoteOn(note)) => EventKind::NoteOn {
            note: note.note_number().get(),
            velocity: note.velocity().get(),
        },
        Event::Midi(Message::NoteOff(note)) => EventKind::NoteOff {
            note: note.note_number().get(),
        },
        Event::Meta(MetaEvent::SetTempo(tempo)) => EventKind::Tempo {
            micros_per_qn: tempo.get(),
        },
        _ => {
            log::trace!("-- ignoring event: {:?}", event);
            EventKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midi_file::core::{Channel, Clocks, DurationName, NoteNumber, Velocity};
    use midi_file::file::{QuartersPerMinute, Track};

    fn two_note_file() -> MidiFile {
        let ch = Channel::new(0);
        let mut track = Track::default();
        track
            .push_time_signature(0, 6, DurationName::Eighth, Clocks::DottedQuarter)
            .unwrap();
        track.push_tempo(0, QuartersPerMinute::new(120)).unwrap();
        track
            .push_note_on(0, ch, NoteNumber::new(60), Velocity::new(100))
            .unwrap();
        track
            .push_note_off(512, ch, NoteNumber::new(60), Velocity::new(64))
            .unwrap();
        track
            .push_note_on(256, ch, NoteNumber::new(67), Velocity::new(0))
            .unwrap();

        let mut mfile = MidiFile::new();
        mfile.push_track(track).unwrap();
        mfile
    }

    #[test]
    fn maps_codec_events_and_deltas() {
        let decoded = decode(&two_note_file()).unwrap();
        assert!(decoded.ticks_per_beat.is_some());
        assert_eq!(decoded.tracks.len(), 1);

        let track = &decoded.tracks[0];
        assert!(track.len() >= 5);
        assert_eq!(
            track[..5],
            [
                TrackEvent::new(0, EventKind::Other),
                TrackEvent::tempo(0, 500_000),
                TrackEvent::note_on(0, 60, 100),
                TrackEvent::note_off(512, 60),
                TrackEvent::note_on(256, 67, 0),
            ]
        );
    }

    #[test]
    fn decoded_file_reconstructs() {
        let decoded = decode(&two_note_file()).unwrap();
        let notes = crate::reconstruct(&decoded);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note_name, "C4");
        assert_eq!(notes[0].time, 0.0);
    }

    #[test]
    fn metrical_timing_gives_ticks_per_beat() {
        assert_eq!(ticks_per_beat(Timing::Metrical(960)).unwrap(), 960);
    }

    #[test]
    fn smpte_timing_is_rejected() {
        let err = ticks_per_beat(Timing::Timecode("25 fps".to_string())).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDivision(_)));
        assert_eq!(err.to_string(), "unsupported SMPTE time division: 25 fps");
    }
}

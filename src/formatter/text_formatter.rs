use crate::error::Result;
use crate::formatter::NoteFormatter;
use crate::midi_event::NoteEvent;

/// One line per note: `[note@00:01.500: C4 0.500s]`.
pub struct TextFormatter {}

impl TextFormatter {
    pub fn new() -> Self {
        Self {}
    }

    fn format_note(&self, note: &NoteEvent) -> String {
        format!(
            "[note@{timestamp}: {name} {duration:.3}s]",
            timestamp = format_note_time(note.time),
            name = note.note_name,
            duration = note.duration
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteFormatter for TextFormatter {
    fn format(&self, notes: &[NoteEvent]) -> Result<String> {
        let lines: Vec<String> = notes.iter().map(|note| self.format_note(note)).collect();
        Ok(lines.join("\n"))
    }
}

/// `mm:ss.mmm`, truncated to whole milliseconds.
fn format_note_time(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0) as u64;
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        millis / 1000 % 60,
        millis % 1000
    )
}

use crate::error::Result;
use crate::formatter::NoteFormatter;
use crate::midi_event::NoteEvent;

/// Renders notes as a JSON array of `{ time, noteName, duration }` objects.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl NoteFormatter for JsonFormatter {
    fn format(&self, notes: &[NoteEvent]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(notes)?
        } else {
            serde_json::to_string(notes)?
        };
        Ok(json)
    }
}

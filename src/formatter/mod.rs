use crate::error::Result;
use crate::midi_event::NoteEvent;

mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;

pub trait NoteFormatter {
    fn format(&self, notes: &[NoteEvent]) -> Result<String>;
}

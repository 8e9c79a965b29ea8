use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::formatter::NoteFormatter;
use crate::midi_event::NoteEvent;

/// Formats `notes` and writes them to `path`, or to stdout when there is none.
pub fn write_notes(
    notes: &[NoteEvent],
    formatter: &dyn NoteFormatter,
    path: Option<&Path>,
) -> Result<()> {
    let mut rendered = formatter.format(notes)?;
    rendered.push('\n');

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            log::info!("wrote {} notes to {}", notes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::JsonFormatter;

    #[test]
    fn writes_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs").join("melody.json");
        let notes = vec![NoteEvent {
            time: 0.0,
            note_name: "C4".to_string(),
            duration: 0.5,
        }];

        write_notes(&notes, &JsonFormatter::new(false), Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[{\"time\":0.0,\"noteName\":\"C4\",\"duration\":0.5}]\n"
        );
    }
}

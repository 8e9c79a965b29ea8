const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scientific pitch name for a MIDI note number, always spelled with sharps.
/// Middle C (60) is "C4".
pub fn note_name(note: u8) -> String {
    let octave = i32::from(note) / 12 - 1;
    let pitch_class = PITCH_CLASSES[usize::from(note % 12)];
    format!("{}{}", pitch_class, octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_table_boundaries() {
        assert_eq!(note_name(0), "C-1");
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(127), "G9");
    }

    #[test]
    fn uses_sharps() {
        assert_eq!(note_name(61), "C#4");
        assert_eq!(note_name(70), "A#4");
        assert_eq!(note_name(11), "B-1");
        assert_eq!(note_name(12), "C0");
    }

    #[test]
    fn out_of_range_follows_arithmetic() {
        assert_eq!(note_name(128), "G#9");
        assert_eq!(note_name(255), "D#20");
    }
}

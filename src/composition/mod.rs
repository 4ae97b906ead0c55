//! Music as data: note tables, sections and the level catalog.
//!
//! A piece is an ordered list of section labels (its form, one label per
//! bar) and a table of one-bar sections. Nothing here executes; the
//! scheduler reads it bar by bar.

/// One rhythmic position: a frequency in Hz, or `None` for a rest.
pub type NoteSlot = Option<f32>;

pub const REST: NoteSlot = None;

/// Build a fixed-size line of note slots; `_` is a rest.
///
/// ```ignore
/// let bass: [NoteSlot; 8] = notes![G3, _, G3, _, G3, _, D3, _];
/// ```
macro_rules! notes {
    (@slot _) => {
        $crate::composition::REST
    };
    (@slot $note:ident) => {
        Some($note)
    };
    ($($slot:tt),* $(,)?) => {
        [$(notes!(@slot $slot)),*]
    };
}

pub mod catalog;
pub mod notes;
pub mod profile;

pub use catalog::CATALOG;
pub use profile::LevelMusicProfile;

/// Slots per bar in each line.
pub const MELODY_SLOTS: usize = 16;
pub const BASS_SLOTS: usize = 8;
pub const HARMONY_SLOTS: usize = 8;

/// A reusable one-bar fragment.
///
/// The melody moves in sixteenths, bass and harmony in eighths. A section
/// without harmony leaves that line silent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub melody: [NoteSlot; MELODY_SLOTS],
    pub bass: [NoteSlot; BASS_SLOTS],
    pub harmony: Option<[NoteSlot; HARMONY_SLOTS]>,
}

impl Section {
    /// Number of notes (non-rest slots) across all three lines.
    pub fn note_count(&self) -> usize {
        let harmony = self.harmony.as_ref().map_or(0, |h| h.iter().flatten().count());
        self.melody.iter().flatten().count() + self.bass.iter().flatten().count() + harmony
    }
}

/// An immutable musical piece.
#[derive(Debug)]
pub struct Composition {
    pub name: &'static str,
    /// Descriptive only
    pub tonal_center: &'static str,
    /// Section label for every bar, in play order
    pub structure: &'static [&'static str],
    pub sections: &'static [(&'static str, Section)],
}

impl Composition {
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, section)| section)
    }

    /// The section played at `bar`, wrapping past the end of the form.
    pub fn section_at(&self, bar: usize) -> Option<&Section> {
        if self.structure.is_empty() {
            return None;
        }
        self.section(self.structure[bar % self.structure.len()])
    }

    pub fn bar_count(&self) -> usize {
        self.structure.len()
    }

    /// Labels used in the structure that have no section.
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.structure
            .iter()
            .copied()
            .filter(|label| self.section(label).is_none())
            .collect()
    }
}

/// The piece played at `level`. Levels below 1 are treated as 1.
pub fn composition_for_level(level: u32) -> &'static Composition {
    CATALOG[profile::composition_index(level)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_structure_label_has_a_section() {
        for piece in CATALOG {
            assert!(
                piece.missing_labels().is_empty(),
                "{} is missing {:?}",
                piece.name,
                piece.missing_labels()
            );
        }
    }

    #[test]
    fn every_piece_is_thirty_two_bars() {
        for piece in CATALOG {
            assert_eq!(piece.bar_count(), 32, "{}", piece.name);
        }
    }

    #[test]
    fn notes_are_positive_frequencies() {
        for piece in CATALOG {
            for (label, section) in piece.sections {
                let harmony = section.harmony.iter().flatten();
                for freq in section.melody.iter().chain(section.bass.iter()).chain(harmony).flatten() {
                    assert!(
                        (100.0..2_000.0).contains(freq),
                        "{} {label}: {freq} Hz",
                        piece.name
                    );
                }
            }
        }
    }

    #[test]
    fn pieces_cycle_by_level() {
        assert_eq!(composition_for_level(1).name, "Serenade");
        assert_eq!(composition_for_level(2).name, "Turkish March");
        assert_eq!(composition_for_level(5).name, "Overture");
        assert_eq!(composition_for_level(6).name, "Serenade");
        assert_eq!(composition_for_level(0).name, "Serenade");
    }

    #[test]
    fn section_at_wraps() {
        let piece = composition_for_level(1);
        assert_eq!(piece.section_at(32), piece.section_at(0));
        assert_eq!(piece.section_at(30), piece.section("A3"));
    }

    #[test]
    fn notes_macro_maps_underscore_to_rest() {
        use notes::{A4, C5};
        let line: [NoteSlot; 4] = notes![A4, _, C5, _];
        assert_eq!(line, [Some(440.0), REST, Some(523.25), None]);
    }

    #[test]
    fn sharps_missing_from_older_tables_sound() {
        // Turkish March section A opens B4 A4 G#4 A4
        let section = composition_for_level(2).section("A").unwrap();
        assert_eq!(section.melody[2], Some(notes::GS4));
        assert!(section.note_count() > 0);
    }
}

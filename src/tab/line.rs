use crate::tab::guitar_string::{GuitarString, STRING_COUNT};
use crate::tab::token::{parse_token, NoteToken, Rest};
use crate::TabError;

/// Character closing every cell and used as filler.
pub const SEPARATOR: char = '-';
/// Cell printed for a string without a note
pub const REST_CELL: &str = "--";
/// Characters per cell
pub const CELL_WIDTH: usize = 2;

/// Text of a single string across one tab line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTrack {
    string: GuitarString,
    cells: String,
}

impl StringTrack {
    fn new(string: GuitarString) -> Self {
        Self {
            string,
            cells: REST_CELL.to_string(),
        }
    }

    pub const fn string(&self) -> GuitarString {
        self.string
    }

    /// Cells without the label prefix
    pub fn cells(&self) -> &str {
        &self.cells
    }

    /// Width of the cells in characters
    pub fn width(&self) -> usize {
        self.cells.chars().count()
    }

    fn push_note(&mut self, value: char) {
        self.cells.push(value);
        self.cells.push(SEPARATOR);
    }

    fn push_rest(&mut self) {
        self.cells.push_str(REST_CELL);
    }

    fn push_filler(&mut self, length: usize) {
        self.cells.extend(std::iter::repeat(SEPARATOR).take(length));
    }

    /// Track as printed, e.g. `G|--3-`
    pub fn render(&self) -> String {
        format!("{}|{}", self.string.label(), self.cells)
    }
}

/// The six string tracks of one tab line, advanced together token by token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLine {
    tracks: [StringTrack; STRING_COUNT],
}

impl Default for TabLine {
    fn default() -> Self {
        Self::new()
    }
}

impl TabLine {
    pub fn new() -> Self {
        Self {
            tracks: GuitarString::ALL.map(StringTrack::new),
        }
    }

    /// Parse and append every token in order.
    ///
    /// Stops at the first malformed token; tokens before it stay applied.
    pub fn add_notes<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), TabError> {
        for token in tokens {
            let token = parse_token(token.as_ref())?;
            self.apply(&token);
        }
        Ok(())
    }

    fn apply(&mut self, token: &NoteToken) {
        let mut touched = [false; STRING_COUNT];
        for &(string, value) in &token.notes {
            self.tracks[string.index()].push_note(value);
            touched[string.index()] = true;
        }
        for (track, _) in self
            .tracks
            .iter_mut()
            .zip(touched)
            .filter(|(_, is_touched)| !is_touched)
        {
            match token.rest {
                Rest::Beat => track.push_rest(),
                Rest::Fill(length) => track.push_filler(length),
            }
        }
    }

    pub fn track(&self, string: GuitarString) -> &StringTrack {
        &self.tracks[string.index()]
    }

    pub fn tracks(&self) -> impl Iterator<Item = &StringTrack> {
        self.tracks.iter()
    }

    /// Rendered tracks in display order
    pub fn notes(&self) -> Vec<String> {
        self.tracks.iter().map(StringTrack::render).collect()
    }

    /// True when all six tracks have the same width
    pub fn is_aligned(&self) -> bool {
        let width = self.tracks[0].width();
        self.tracks.iter().all(|t| t.width() == width)
    }

    pub fn render(&self) -> String {
        self.notes().join("\n")
    }
}

use crate::tab::guitar_string::Technique;
use crate::tab::line::TabLine;
use crate::tab::writer::{FileWriter, TabWriter};
use crate::TabError;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BPM: u32 = 100;

const TEMPO_COMMENT: &str =
    "^This number isn't perfect, but it's close. Play along with the song to get a better feel.";

/// A whole tab: song metadata plus tab lines in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDocument {
    bpm: u32,
    capo: Option<String>,
    notes: Option<String>,
    header: String,
    lines: Vec<TabLine>,
}

impl Default for TabDocument {
    fn default() -> Self {
        Self::new(DEFAULT_BPM, None, None)
    }
}

impl TabDocument {
    /// Empty capo or notes are treated as absent.
    pub fn new(bpm: u32, capo: Option<String>, notes: Option<String>) -> Self {
        let capo = capo.filter(|c| !c.is_empty());
        let notes = notes.filter(|n| !n.is_empty());
        let header = build_header(bpm, capo.as_deref(), notes.as_deref());
        Self {
            bpm,
            capo,
            notes,
            header,
            lines: Vec::new(),
        }
    }

    pub const fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn capo(&self) -> Option<&str> {
        self.capo.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn lines(&self) -> &[TabLine] {
        &self.lines
    }

    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Build a new tab line from `tokens` and append it.
    ///
    /// The document is left untouched if any token is malformed.
    pub fn add_line<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), TabError> {
        let mut line = TabLine::new();
        line.add_notes(tokens)?;
        if !line.is_aligned() {
            log::debug!("Tab line {} is not column aligned", self.lines.len() + 1);
        }
        self.lines.push(line);
        log::debug!("Added tab line {} ({} tokens)", self.lines.len(), tokens.len());
        Ok(())
    }

    /// Header followed by every line, lines separated by a blank line
    pub fn output(&self) -> String {
        let body = self
            .lines
            .iter()
            .map(TabLine::render)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}{}", self.header, body)
    }

    /// Save to `<name>.txt` in the current directory
    pub fn save(&self, name: Option<&str>) -> Result<PathBuf, TabError> {
        self.save_to(name, &mut FileWriter::default())
    }

    /// Save to `<name>.txt` through `writer`, returning the path handed to it
    pub fn save_to<W: TabWriter>(
        &self,
        name: Option<&str>,
        writer: &mut W,
    ) -> Result<PathBuf, TabError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(TabError::ValidationError(
                    "Please provide the song name/file name!".to_string(),
                ))
            }
        };
        let path = PathBuf::from(format!("{name}.txt"));
        writer.write_text(&path, &self.output())?;
        Ok(path)
    }
}

impl fmt::Display for TabDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output())
    }
}

fn build_header(bpm: u32, capo: Option<&str>, notes: Option<&str>) -> String {
    let mut header = vec![
        Technique::legend(),
        "Tabs for Song :".to_string(),
        format!("BPM : {bpm}"),
    ];
    if let Some(capo) = capo {
        header.push(format!("Capo : {capo}"));
    }
    header.push(TEMPO_COMMENT.to_string());
    if let Some(notes) = notes {
        header.push(format!("Notes : {notes}"));
    }
    // trailing blank line
    header.push(String::new());
    header.push(String::new());
    header.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[derive(Default)]
    struct MemoryWriter {
        written: Vec<(PathBuf, String)>,
    }

    impl TabWriter for MemoryWriter {
        fn write_text(&mut self, path: &Path, content: &str) -> Result<(), TabError> {
            self.written.push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    struct FailingWriter;

    impl TabWriter for FailingWriter {
        fn write_text(&mut self, _path: &Path, _content: &str) -> Result<(), TabError> {
            Err(TabError::IoError("disk full".to_string()))
        }
    }

    fn init_logger() {
        env_logger::builder()
            .is_test(true)
            .try_init()
            .unwrap_or_default();
    }

    #[test]
    fn test_header_minimal() {
        let doc = TabDocument::default();
        let expected = format!(
            "{}\nTabs for Song :\nBPM : 100\n{TEMPO_COMMENT}\n\n",
            Technique::legend()
        );
        assert_eq!(doc.header(), expected);
        assert_eq!(doc.bpm(), DEFAULT_BPM);
        assert_eq!(doc.capo(), None);
    }

    #[test]
    fn test_header_with_capo_and_notes() {
        let doc = TabDocument::new(
            92,
            Some("2nd fret".to_string()),
            Some("Drop D".to_string()),
        );
        let lines: Vec<&str> = doc.header().lines().collect();
        assert_eq!(lines[1], "Tabs for Song :");
        assert_eq!(lines[2], "BPM : 92");
        assert_eq!(lines[3], "Capo : 2nd fret");
        assert_eq!(lines[4], TEMPO_COMMENT);
        assert_eq!(lines[5], "Notes : Drop D");
        assert_eq!(lines[6], "");
        assert!(doc.header().ends_with("Notes : Drop D\n\n"));
    }

    #[test]
    fn test_empty_capo_is_absent() {
        let doc = TabDocument::new(100, Some(String::new()), Some(String::new()));
        assert_eq!(doc.capo(), None);
        assert_eq!(doc.notes(), None);
        assert_eq!(doc.header(), TabDocument::default().header());
    }

    #[test]
    fn test_output_without_lines_is_header() {
        let doc = TabDocument::new(120, Some("3".to_string()), None);
        assert_eq!(doc.output(), doc.header());
        assert_eq!(doc.to_string(), doc.header());
    }

    #[test]
    fn test_output_lines() {
        init_logger();
        let mut doc = TabDocument::default();
        doc.add_line(&["e5G3"]).unwrap();
        doc.add_line(&["A0"]).unwrap();
        let expected = format!(
            "{}E|--5-\nB|----\nG|--3-\nD|----\nA|----\nE|----\n\nE|----\nB|----\nG|----\nD|----\nA|--0-\nE|----",
            doc.header()
        );
        assert_eq!(doc.output(), expected);
        assert_eq!(doc.output(), doc.output());
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_failed_line_is_not_added() {
        let mut doc = TabDocument::default();
        doc.add_line(&["e5"]).unwrap();
        let before = doc.output();
        let result = doc.add_line(&["e7", "zq"]);
        assert!(matches!(result, Err(TabError::ParsingError(_))));
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.output(), before);
    }

    #[test]
    fn test_save_requires_name() {
        let doc = TabDocument::default();
        let mut writer = MemoryWriter::default();
        assert!(matches!(
            doc.save_to(None, &mut writer),
            Err(TabError::ValidationError(_))
        ));
        assert!(matches!(
            doc.save_to(Some(""), &mut writer),
            Err(TabError::ValidationError(_))
        ));
        assert!(matches!(doc.save(None), Err(TabError::ValidationError(_))));
        assert!(writer.written.is_empty());
    }

    #[test]
    fn test_save_writes_output() {
        let mut doc = TabDocument::default();
        doc.add_line(&["D2", "z2"]).unwrap();
        let mut writer = MemoryWriter::default();
        let path = doc.save_to(Some("mysong"), &mut writer).unwrap();
        assert_eq!(path, PathBuf::from("mysong.txt"));
        assert_eq!(writer.written.len(), 1);
        assert!(writer.written[0].0.ends_with("mysong.txt"));
        assert_eq!(writer.written[0].1, doc.output());
    }

    #[test]
    fn test_save_surfaces_writer_error() {
        let doc = TabDocument::default();
        let result = doc.save_to(Some("mysong"), &mut FailingWriter);
        assert!(matches!(result, Err(TabError::IoError(_))));
    }
}

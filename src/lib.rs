//! Tabmaker - plain text guitar tablature builder
//!
//! This library provides:
//! - Parsing of compact note tokens such as `e5G3` or `z4`
//! - Six string tab lines kept in lock-step
//! - Tab documents with a header, rendered to text and saved as `.txt`
//!
//! # Example
//!
//! ```no_run
//! use tabmaker::TabDocument;
//!
//! let mut tab = TabDocument::new(120, Some("2".to_string()), None);
//! tab.add_line(&["e0", "e3", "B1G0", "z2"]).unwrap();
//! println!("{}", tab.output());
//! tab.save(Some("mysong")).unwrap();
//! ```

pub mod error;
pub mod tab;

// Re-export main types for convenience
pub use error::TabError;
pub use tab::{
    document::{TabDocument, DEFAULT_BPM},
    guitar_string::{GuitarString, NoteValue, Technique},
    line::{StringTrack, TabLine},
    token::{parse_token, parse_token_lines, NoteToken, Rest},
    writer::{FileWriter, TabWriter},
};

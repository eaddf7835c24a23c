pub mod document;
pub mod guitar_string;
pub mod line;
pub mod token;
pub mod writer;

use crate::tab::guitar_string::GuitarString;
use crate::TabError;
use nom::character::complete::{anychar, char};
use nom::combinator::map_opt;
use nom::multi::many0;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// Token prefix introducing a rest directive
pub const REST_MARKER: char = 'z';

/// What the strings without a note receive for a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rest {
    /// One default rest cell
    Beat,
    /// Raw run of `n` filler characters
    Fill(usize),
}

/// A parsed note token: the notes to place and the rest applied to the other strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteToken {
    pub rest: Rest,
    pub notes: Vec<(GuitarString, char)>,
}

/// Parse `z<digit>` into the filler length
fn parse_rest_directive(i: &str) -> IResult<&str, usize> {
    preceded(
        char(REST_MARKER),
        map_opt(anychar, |c| c.to_digit(10).map(|n| n as usize)),
    )
    .parse(i)
}

/// Parse a raw `(string_id, value)` pair
fn parse_pair(i: &str) -> IResult<&str, (char, char)> {
    (anychar, anychar).parse(i)
}

/// Parse a single note token.
///
/// A token starting with `z` must open with a `z<digit>` rest directive, the rest of
/// the token is scanned as pairs. Pairs naming an unknown string are ignored and a
/// trailing unpaired character is dropped.
pub fn parse_token(token: &str) -> Result<NoteToken, TabError> {
    let (i, rest) = if token.starts_with(REST_MARKER) {
        let (i, length) = parse_rest_directive(token).map_err(|err| {
            TabError::ParsingError(format!("Invalid rest length in token {token:?}: {err}"))
        })?;
        (i, Rest::Fill(length))
    } else {
        (token, Rest::Beat)
    };

    let (remaining, pairs) = many0(parse_pair)
        .parse(i)
        .map_err(|err| TabError::ParsingError(format!("Invalid token {token:?}: {err}")))?;
    if !remaining.is_empty() {
        log::debug!("Dropping unpaired trailing {remaining:?} in token {token:?}");
    }

    let notes = pairs
        .into_iter()
        .filter_map(|(id, value)| match GuitarString::from_id(id) {
            Some(string) => Some((string, value)),
            None => {
                log::debug!("Ignoring unknown string id {id:?} in token {token:?}");
                None
            }
        })
        .collect();

    Ok(NoteToken { rest, notes })
}

/// Split token text into tab lines.
///
/// One tab line per text line, tokens separated by whitespace, blank lines and
/// `#` comments skipped.
pub fn parse_token_lines(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

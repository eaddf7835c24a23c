use std::fmt;

pub const STRING_COUNT: usize = 6;

/// One of the six strings of a standard guitar.
///
/// `HighE` and `LowE` render with the same `E` label but remain distinct strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuitarString {
    HighE,
    B,
    G,
    D,
    A,
    LowE,
}

impl GuitarString {
    /// Display order of the strings inside a tab line
    pub const ALL: [Self; STRING_COUNT] = [Self::HighE, Self::B, Self::G, Self::D, Self::A, Self::LowE];

    /// Resolve the string identifier used in note tokens
    pub const fn from_id(id: char) -> Option<Self> {
        match id {
            'e' => Some(Self::HighE),
            'B' => Some(Self::B),
            'G' => Some(Self::G),
            'D' => Some(Self::D),
            'A' => Some(Self::A),
            'E' => Some(Self::LowE),
            _ => None,
        }
    }

    /// Identifier used in note tokens
    pub const fn id(self) -> char {
        match self {
            Self::HighE => 'e',
            Self::B => 'B',
            Self::G => 'G',
            Self::D => 'D',
            Self::A => 'A',
            Self::LowE => 'E',
        }
    }

    /// Label printed in front of the track
    pub const fn label(self) -> char {
        match self {
            Self::HighE | Self::LowE => 'E',
            Self::B => 'B',
            Self::G => 'G',
            Self::D => 'D',
            Self::A => 'A',
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Playing techniques documented in the tab legend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Technique {
    SlideUp,
    SlideDown,
    HammerOn,
    PullOff,
    Bend,
    Release,
    Vibrato,
    Muted,
}

impl Technique {
    pub const ALL: [Self; 8] = [
        Self::SlideUp,
        Self::SlideDown,
        Self::HammerOn,
        Self::PullOff,
        Self::Bend,
        Self::Release,
        Self::Vibrato,
        Self::Muted,
    ];

    pub const fn symbol(self) -> char {
        match self {
            Self::SlideUp => '/',
            Self::SlideDown => '\\',
            Self::HammerOn => 'h',
            Self::PullOff => 'p',
            Self::Bend => 'b',
            Self::Release => 'r',
            Self::Vibrato => 'v',
            Self::Muted => 'x',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SlideUp => "Slide Up",
            Self::SlideDown => "Slide Down",
            Self::HammerOn => "Hammer On",
            Self::PullOff => "Pull Off",
            Self::Bend => "Bend",
            Self::Release => "Release",
            Self::Vibrato => "Vibrato",
            Self::Muted => "Muted",
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// Legend line listing every technique, e.g. `(/) Slide Up  (\) Slide Down ...`
    pub fn legend() -> String {
        Self::ALL
            .iter()
            .map(|t| format!("({}) {}", t.symbol(), t.name()))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// How a note value will read once printed in a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoteValue {
    Fret(u8),
    Technique(Technique),
    Other(char),
}

impl NoteValue {
    /// Classify a value; nothing is rejected
    pub fn classify(value: char) -> Self {
        if let Some(fret) = value.to_digit(10) {
            Self::Fret(fret as u8)
        } else if let Some(technique) = Technique::from_symbol(value) {
            Self::Technique(technique)
        } else {
            Self::Other(value)
        }
    }
}

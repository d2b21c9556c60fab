use std::fmt;

use serde::{Deserialize, Serialize};

/// Character used for the blank tile in catalogs and on the wire
pub const BLANK: char = '_';

/// A single tile face: an uppercase ASCII letter or the blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

impl Letter {
    pub fn new(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() || upper == BLANK {
            Some(Self(upper))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == BLANK
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Letter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Letter::new(ch).ok_or_else(|| format!("'{}' is not a tile letter", value)),
            _ => Err(format!("'{}' is not a single tile letter", value)),
        }
    }
}

impl TryFrom<String> for Letter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Letter::try_from(value.as_str())
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

/// Score multiplier printed on a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellRole {
    #[serde(rename = "plain")]
    Plain,
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
}

/// Point value and bag supply for one letter, as read from the tile catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDefinition {
    pub letter: Letter,
    pub value: u32,
    pub supply: u32,
}

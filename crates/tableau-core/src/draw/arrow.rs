//! Arrow head placement for line primitives.

use std::{fmt, str};

use serde::Deserialize;

/// Defines which ends of a line carry an arrow head.
///
/// - `Forward`: `->` head at the end point
/// - `Backward`: `<-` head at the start point
/// - `Bidirectional`: `<->` heads at both ends
/// - `Plain`: `-` no heads
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    Forward,
    Backward,
    Bidirectional,
    #[default]
    Plain,
}

impl ArrowDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "->",
            Self::Backward => "<-",
            Self::Bidirectional => "<->",
            Self::Plain => "-",
        }
    }

    /// Returns `true` if a head is drawn at the end point.
    pub fn has_head(self) -> bool {
        matches!(self, Self::Forward | Self::Bidirectional)
    }

    /// Returns `true` if a head is drawn at the start point.
    pub fn has_tail(self) -> bool {
        matches!(self, Self::Backward | Self::Bidirectional)
    }
}

impl str::FromStr for ArrowDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "->" => Ok(Self::Forward),
            "<-" => Ok(Self::Backward),
            "<->" => Ok(Self::Bidirectional),
            "-" => Ok(Self::Plain),
            _ => Err("Invalid arrow direction"),
        }
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Screen positions a slot can be anchored to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anchor of a stack of messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// Horizontal placement of a slot inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Center,
    Right,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Top,
        Position::TopLeft,
        Position::TopRight,
        Position::Bottom,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Parses a position name, falling back to [`Position::Top`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::Bottom => "bottom",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Whether the stack grows downward from the top edge.
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::Top | Position::TopLeft | Position::TopRight
        )
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        match self {
            Position::Top | Position::Bottom => Edge::Center,
            Position::TopLeft | Position::BottomLeft => Edge::Left,
            Position::TopRight | Position::BottomRight => Edge::Right,
        }
    }
}

/// Error returned when a position name is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "bottom" => Ok(Position::Bottom),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            other => Err(UnknownPosition(other.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

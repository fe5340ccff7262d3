// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::flow::{Action, MessageType, Position};
use std::fmt;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input forwarded to the flow (button presses, dismissals, ticks).
    Flow(Action),
    /// Show a plain message of the given type.
    Spawn(MessageType),
    /// Show a message carrying action buttons.
    SpawnWithButtons,
    PositionSelected(Position),
    FlowToggled(bool),
    IncreaseMax,
    DecreaseMax,
    DelaySelected(DelayPreset),
    /// Hide every shown and queued message.
    Clean,
    /// Recompute stack offsets with the current settings.
    Reposition,
    SaveSettings,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Anchor position for new messages.
    pub position: Option<Position>,
    /// Maximum visible messages per slot; `0` means unlimited.
    pub max: Option<usize>,
    /// Global auto-hide delay in milliseconds; `0` disables auto-hide.
    pub delay: Option<u64>,
    /// Animation duration in milliseconds.
    pub speed: Option<u64>,
    /// Overlay messages instead of stacking them.
    pub no_flow: bool,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}

/// Global delay choices offered by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPreset {
    Off,
    Short,
    Medium,
    Long,
}

impl DelayPreset {
    pub const ALL: [DelayPreset; 4] = [
        DelayPreset::Off,
        DelayPreset::Short,
        DelayPreset::Medium,
        DelayPreset::Long,
    ];

    #[must_use]
    pub fn millis(self) -> Option<u64> {
        match self {
            DelayPreset::Off => None,
            DelayPreset::Short => Some(1500),
            DelayPreset::Medium => Some(3000),
            DelayPreset::Long => Some(6000),
        }
    }

    /// Closest preset for a configured delay.
    #[must_use]
    pub fn from_millis(delay: Option<u64>) -> Self {
        match delay {
            None | Some(0) => DelayPreset::Off,
            Some(ms) if ms <= 2000 => DelayPreset::Short,
            Some(ms) if ms <= 4500 => DelayPreset::Medium,
            Some(_) => DelayPreset::Long,
        }
    }
}

impl fmt::Display for DelayPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.millis() {
            None => f.write_str("No auto-hide"),
            Some(ms) => write!(f, "{:.1} s", ms as f64 / 1000.0),
        }
    }
}

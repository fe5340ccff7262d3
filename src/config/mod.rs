// SPDX-License-Identifier: MPL-2.0
//! This module handles the flow configuration: the runtime [`Settings`]
//! read by the flow manager, and loading and saving them to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[flow]` - Animation speed, anchor position, stacking, capacity and delay
//! - `[layout]` - Toast height and spacing used to compute stack offsets
//!
//! # Examples
//!
//! ```no_run
//! use messg::config::{self, Settings};
//!
//! let (config, _warning) = config::load();
//! let mut settings = Settings::from(&config);
//! settings.max = Some(3);
//!
//! config::save(&settings.to_config()).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::flow::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Runtime Settings
// =============================================================================

/// Process-wide flow settings.
///
/// Owned by the flow manager and read at use time, so changes apply to
/// every operation performed after them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Show/hide animation duration in milliseconds.
    pub speed: u64,
    /// Slot that newly created messages join.
    pub position: Position,
    /// Whether visible messages stack; `false` overlays them at the anchor.
    pub flow: bool,
    /// Maximum number of visible messages per slot (`None` = unlimited).
    ///
    /// Lowering it does not hide anything already shown; a slot above the
    /// cap promotes nothing until it drops below it.
    pub max: Option<usize>,
    /// Global auto-hide delay in milliseconds (`None` = no auto-hide).
    pub delay: Option<u64>,
    /// Height of a toast in logical pixels.
    pub toast_height: f32,
    /// Gap between stacked toasts in logical pixels.
    pub spacing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_MS,
            position: Position::default(),
            flow: DEFAULT_FLOW,
            max: None,
            delay: None,
            toast_height: DEFAULT_TOAST_HEIGHT,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    /// Distance between the anchor edges of two neighbouring toasts.
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.toast_height + self.spacing
    }

    /// Whether a slot with `visible` messages can show one more.
    ///
    /// A `max` of zero counts as unlimited.
    #[must_use]
    pub fn has_capacity(&self, visible: usize) -> bool {
        self.max
            .filter(|max| *max > 0)
            .is_none_or(|max| visible < max)
    }

    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            flow: FlowConfig {
                speed: Some(self.speed),
                position: Some(self.position),
                flow: Some(self.flow),
                max: self.max,
                delay: self.delay,
            },
            layout: LayoutConfig {
                toast_height: Some(self.toast_height),
                spacing: Some(self.spacing),
            },
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let defaults = Settings::default();
        Self {
            speed: config
                .flow
                .speed
                .map_or(defaults.speed, |speed| speed.min(MAX_SPEED_MS)),
            position: config.flow.position.unwrap_or(defaults.position),
            flow: config.flow.flow.unwrap_or(defaults.flow),
            max: config.flow.max.filter(|max| *max > 0),
            delay: config.flow.delay,
            toast_height: config
                .layout
                .toast_height
                .map_or(defaults.toast_height, |h| h.max(MIN_TOAST_HEIGHT)),
            spacing: config
                .layout
                .spacing
                .map_or(defaults.spacing, |s| s.clamp(0.0, MAX_SPACING)),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Flow behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowConfig {
    /// Animation duration in milliseconds.
    #[serde(default = "default_speed", skip_serializing_if = "Option::is_none")]
    pub speed: Option<u64>,

    /// Anchor of new messages.
    #[serde(
        default = "default_position",
        deserialize_with = "deserialize_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Position>,

    /// Whether messages stack.
    #[serde(default = "default_flow", skip_serializing_if = "Option::is_none")]
    pub flow: Option<bool>,

    /// Maximum visible messages per slot. `0` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,

    /// Global auto-hide delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            position: default_position(),
            flow: default_flow(),
            max: None,
            delay: None,
        }
    }
}

/// Toast geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(
        default = "default_toast_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub toast_height: Option<f32>,

    #[serde(default = "default_spacing", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            toast_height: default_toast_height(),
            spacing: default_spacing(),
        }
    }
}

/// Persisted configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub flow: FlowConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_speed() -> Option<u64> {
    Some(DEFAULT_SPEED_MS)
}

fn default_position() -> Option<Position> {
    Some(Position::default())
}

fn default_flow() -> Option<bool> {
    Some(DEFAULT_FLOW)
}

fn default_toast_height() -> Option<f32> {
    Some(DEFAULT_TOAST_HEIGHT)
}

fn default_spacing() -> Option<f32> {
    Some(DEFAULT_SPACING)
}

/// Unknown position names fall back to the default instead of failing the load.
fn deserialize_position<'de, D>(deserializer: D) -> std::result::Result<Option<Position>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Some(Position::parse_lenient(&raw)))
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

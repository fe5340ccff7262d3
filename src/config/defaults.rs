// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Flow**: Animation speed, capacity and auto-hide delay
//! - **Layout**: Toast geometry used for stacking offsets

// ==========================================================================
// Flow Defaults
// ==========================================================================

/// Default show/hide animation duration (in milliseconds).
pub const DEFAULT_SPEED_MS: u64 = 250;

/// Maximum accepted animation duration (in milliseconds).
pub const MAX_SPEED_MS: u64 = 5_000;

/// Whether messages stack by default.
pub const DEFAULT_FLOW: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of a single toast (in logical pixels).
pub const DEFAULT_TOAST_HEIGHT: f32 = 56.0;

/// Minimum toast height; buttons and text need at least this much room.
pub const MIN_TOAST_HEIGHT: f32 = 32.0;

/// Gap between stacked toasts (in logical pixels).
pub const DEFAULT_SPACING: f32 = 8.0;

/// Largest accepted gap between stacked toasts.
pub const MAX_SPACING: f32 = 64.0;

// SPDX-License-Identifier: MPL-2.0
//! Rendering of the message flow with iced.
//!
//! [`Toast::view_overlay`] turns a [`crate::flow::Flow`] into one overlay
//! element emitting [`crate::flow::Action`]s; feed those back into
//! [`crate::flow::Flow::update`] from the application's update function.

pub mod design_tokens;
pub mod styles;
mod toast;

pub use toast::Toast;

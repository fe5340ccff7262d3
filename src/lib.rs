// SPDX-License-Identifier: MPL-2.0
//! `messg` manages transient notification messages for iced applications.
//!
//! Messages are grouped by screen position, stacked with animated offsets,
//! capped per position with a FIFO queue for the overflow, and hidden
//! after a per-message or global delay.
//!
//! - [`flow`] - the message entity and the flow manager
//! - [`config`] - global settings and their `settings.toml` persistence
//! - [`ui`] - the iced toast overlay
//! - [`app`] - a demo window driving the flow

#![doc(html_root_url = "https://docs.rs/messg/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Shared styles for the demo window.

pub mod button;
pub mod container;

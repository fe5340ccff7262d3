// SPDX-License-Identifier: MPL-2.0
//! Message flow: transient notifications stacked per screen position.
//!
//! # Components
//!
//! - [`message`] - `Message` entity, its type and buttons
//! - [`manager`] - `Flow` for capacity, queuing, stacking and lifecycle
//! - [`animation`] - show/hide transitions and offset motion
//! - [`timer`] - auto-hide deadlines
//!
//! # Usage
//!
//! ```
//! use messg::config::Settings;
//! use messg::flow::{success, Flow};
//! use std::time::{Duration, Instant};
//!
//! let mut flow = Flow::new(Settings { max: Some(3), ..Settings::default() });
//! let start = Instant::now();
//!
//! let id = flow
//!     .push(success("Image saved", Some(3000)), start)
//!     .button("Open", |label| println!("{label} pressed"))
//!     .id();
//! assert!(!flow.is_hidden(id));
//!
//! // Drive timers and transitions from the UI tick.
//! flow.tick(start + Duration::from_millis(3250));
//! assert!(flow.is_hidden(id));
//! ```

pub mod animation;
pub mod manager;
pub mod message;
mod position;
mod slot;
pub mod timer;

pub use manager::{Action, Event, Flow, Handle};
pub use message::{error, info, messg, success, warning, Button, Message, MessageId, MessageType};
pub use position::{Edge, Position, UnknownPosition};

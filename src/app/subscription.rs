// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::flow::Action;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval used while messages are animating or waiting to hide.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drives the flow clock. Returns no subscription once the flow is idle.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(FRAME_INTERVAL).map(|now| Message::Flow(Action::Tick(now)))
    } else {
        Subscription::none()
    }
}

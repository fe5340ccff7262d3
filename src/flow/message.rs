// SPDX-License-Identifier: MPL-2.0
//! Core message data structures.
//!
//! This module defines the [`Message`] entity, its [`MessageType`] and the
//! buttons it carries. The entity only knows about its own lifecycle; slot
//! membership and capacity are the flow manager's business.

use super::animation::{Motion, Transition, TransitionKind};
use super::position::Position;
use crate::config::Settings;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Callback run when a button is pressed. Receives the button label.
pub type ClickCallback = Box<dyn FnMut(&str)>;

/// Callback run once when a message has finished hiding.
pub type HideCallback = Box<dyn FnOnce()>;

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates a new unique message ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Message type determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Default,
    Success,
    Info,
    Warning,
    Error,
}

impl MessageType {
    pub const ALL: [MessageType; 5] = [
        MessageType::Default,
        MessageType::Success,
        MessageType::Info,
        MessageType::Warning,
        MessageType::Error,
    ];

    /// Parses a type name, falling back to [`MessageType::Default`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Default => "default",
            MessageType::Success => "success",
            MessageType::Info => "info",
            MessageType::Warning => "warning",
            MessageType::Error => "error",
        }
    }

    /// Returns the accent color for this type.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            MessageType::Default => palette::GRAY_700,
            MessageType::Success => palette::SUCCESS_500,
            MessageType::Info => palette::INFO_500,
            MessageType::Warning => palette::WARNING_500,
            MessageType::Error => palette::ERROR_500,
        }
    }
}

impl FromStr for MessageType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(MessageType::Default),
            "success" => Ok(MessageType::Success),
            "info" => Ok(MessageType::Info),
            "warning" => Ok(MessageType::Warning),
            "error" => Ok(MessageType::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action button rendered on a message.
pub struct Button {
    label: String,
    on_click: Option<ClickCallback>,
}

impl Button {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.on_click.is_some()
    }

    fn press(&mut self) {
        if let Some(on_click) = self.on_click.as_mut() {
            on_click(&self.label);
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("has_action", &self.has_action())
            .finish()
    }
}

/// Where a message is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Waiting in the slot's queue for a free place.
    Deferred,
    /// Fading in.
    Showing(Transition),
    /// Fully shown.
    Visible,
    /// Fading out; removal happens when the transition completes.
    Hiding(Transition),
}

/// A message to be displayed to the user.
pub struct Message {
    id: MessageId,
    text: String,
    kind: MessageType,
    /// Per-instance auto-hide delay in milliseconds (overrides the global one).
    delay: Option<u64>,
    buttons: Vec<Button>,
    on_hide: Option<HideCallback>,
    phase: Phase,
    slot: Position,
    /// Unset until the flow places the message.
    offset: Option<Motion>,
}

impl Message {
    /// Creates a new message. Empty text is accepted and renders an empty body.
    pub fn new(text: impl Into<String>, kind: MessageType) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            kind,
            delay: None,
            buttons: Vec::new(),
            on_hide: None,
            phase: Phase::Deferred,
            slot: Position::default(),
            offset: None,
        }
    }

    /// Sets the auto-hide delay in milliseconds. Zero disables auto-hide
    /// for this message even when a global delay is configured.
    #[must_use]
    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    /// Appends a button that runs `on_click` with its label, then hides the message.
    #[must_use]
    pub fn button(mut self, label: impl Into<String>, on_click: impl FnMut(&str) + 'static) -> Self {
        self.push_button(label.into(), Some(Box::new(on_click)));
        self
    }

    /// Appends a button that only hides the message.
    #[must_use]
    pub fn dismiss_button(mut self, label: impl Into<String>) -> Self {
        self.push_button(label.into(), None);
        self
    }

    /// Registers the callback run once when the message starts hiding.
    ///
    /// Replaces any previously registered callback.
    #[must_use]
    pub fn on_hide(mut self, on_hide: impl FnOnce() + 'static) -> Self {
        self.set_on_hide(Box::new(on_hide));
        self
    }

    pub(crate) fn push_button(&mut self, label: String, on_click: Option<ClickCallback>) {
        self.buttons.push(Button { label, on_click });
    }

    pub(crate) fn set_on_hide(&mut self, on_hide: HideCallback) {
        self.on_hide = Some(on_hide);
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> MessageType {
        self.kind
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Slot this message was registered in.
    #[must_use]
    pub fn slot(&self) -> Position {
        self.slot
    }

    /// Whether the message is hidden: queued, hiding or gone.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self.phase, Phase::Deferred | Phase::Hiding(_))
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.phase == Phase::Deferred
    }

    /// Whether a hide transition is already running.
    #[must_use]
    pub fn is_hiding(&self) -> bool {
        matches!(self.phase, Phase::Hiding(_))
    }

    /// Whether the message is animating at `now` (fading or moving).
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Showing(_) | Phase::Hiding(_))
            || self.offset.is_some_and(|motion| motion.is_moving(now))
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Deferred => 0.0,
            Phase::Visible => 1.0,
            Phase::Showing(transition) | Phase::Hiding(transition) => transition.opacity(now),
        }
    }

    /// Distance from the anchor edge at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.offset.map_or(0.0, |motion| motion.value(now))
    }

    /// Distance from the anchor edge once motion settles.
    #[must_use]
    pub fn target_offset(&self) -> f32 {
        self.offset.map_or(0.0, |motion| motion.target())
    }

    /// Resolves the auto-hide duration: instance delay, else global delay.
    ///
    /// A zero delay means no auto-hide.
    #[must_use]
    pub fn effective_delay(&self, settings: &Settings) -> Option<Duration> {
        self.delay
            .or(settings.delay)
            .filter(|delay| *delay > 0)
            .map(Duration::from_millis)
    }

    pub(crate) fn assign_slot(&mut self, slot: Position) {
        self.slot = slot;
    }

    pub(crate) fn begin_show(&mut self, now: Instant, speed: Duration) {
        if self.phase == Phase::Deferred {
            self.phase = Phase::Showing(Transition::enter(now, speed));
        }
    }

    /// Starts the hide transition. Returns `false` when already hiding.
    ///
    /// A queued message was never drawn, so it leaves without fading.
    pub(crate) fn begin_hide(&mut self, now: Instant, speed: Duration) -> bool {
        let duration = match self.phase {
            Phase::Hiding(_) => return false,
            Phase::Deferred => Duration::ZERO,
            Phase::Showing(_) | Phase::Visible => speed,
        };
        self.phase = Phase::Hiding(Transition::leave(now, duration));
        true
    }

    /// Instant at which the running transition completes, if any.
    pub(crate) fn transition_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Showing(transition) | Phase::Hiding(transition) => {
                Some(transition.completes_at())
            }
            Phase::Deferred | Phase::Visible => None,
        }
    }

    /// Settles a completed show transition and reports which kind finished.
    ///
    /// A completed hide transition is reported but left in place; the flow
    /// manager releases the message.
    pub(crate) fn settle(&mut self, now: Instant) -> Option<TransitionKind> {
        match self.phase {
            Phase::Showing(transition) if transition.is_complete(now) => {
                self.phase = Phase::Visible;
                Some(TransitionKind::Enter)
            }
            Phase::Hiding(transition) if transition.is_complete(now) => {
                Some(TransitionKind::Leave)
            }
            _ => None,
        }
    }

    /// Animates towards `offset`. An unplaced message starts there at rest.
    pub(crate) fn move_to(&mut self, offset: f32, now: Instant, speed: Duration) {
        if let Some(motion) = self.offset.as_mut() {
            motion.retarget(offset, now, speed);
        } else {
            self.place_at(offset, now);
        }
    }

    pub(crate) fn place_at(&mut self, offset: f32, now: Instant) {
        self.offset = Some(Motion::resting(offset, now));
    }

    /// Runs the button's callback and returns its label.
    pub(crate) fn press(&mut self, index: usize) -> Option<String> {
        let button = self.buttons.get_mut(index)?;
        button.press();
        Some(button.label.clone())
    }

    pub(crate) fn take_on_hide(&mut self) -> Option<HideCallback> {
        self.on_hide.take()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("kind", &self.kind)
            .field("delay", &self.delay)
            .field("buttons", &self.buttons)
            .field("phase", &self.phase)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Creates a default message, optionally auto-hiding after `delay_ms`.
pub fn messg(text: impl Into<String>, delay_ms: Option<u64>) -> Message {
    with_delay(Message::new(text, MessageType::Default), delay_ms)
}

/// Creates a success message.
pub fn success(text: impl Into<String>, delay_ms: Option<u64>) -> Message {
    with_delay(Message::new(text, MessageType::Success), delay_ms)
}

/// Creates an info message.
pub fn info(text: impl Into<String>, delay_ms: Option<u64>) -> Message {
    with_delay(Message::new(text, MessageType::Info), delay_ms)
}

/// Creates a warning message.
pub fn warning(text: impl Into<String>, delay_ms: Option<u64>) -> Message {
    with_delay(Message::new(text, MessageType::Warning), delay_ms)
}

/// Creates an error message.
pub fn error(text: impl Into<String>, delay_ms: Option<u64>) -> Message {
    with_delay(Message::new(text, MessageType::Error), delay_ms)
}

fn with_delay(message: Message, delay_ms: Option<u64>) -> Message {
    match delay_ms {
        Some(delay) => message.delay(delay),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SPEED: Duration = Duration::from_millis(250);

    #[test]
    fn message_ids_are_unique() {
        let m1 = messg("test", None);
        let m2 = messg("test", None);
        assert_ne!(m1.id(), m2.id());
    }

    #[test]
    fn type_colors_are_distinct() {
        let colors: Vec<Color> = MessageType::ALL.iter().map(MessageType::color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_type_falls_back_to_default() {
        assert_eq!(MessageType::parse_lenient("fatal"), MessageType::Default);
        assert_eq!(MessageType::parse_lenient("Warning"), MessageType::Warning);
    }

    #[test]
    fn constructors_set_correct_type() {
        assert_eq!(messg("", None).kind(), MessageType::Default);
        assert_eq!(success("", None).kind(), MessageType::Success);
        assert_eq!(info("", None).kind(), MessageType::Info);
        assert_eq!(warning("", None).kind(), MessageType::Warning);
        assert_eq!(error("", None).kind(), MessageType::Error);
    }

    #[test]
    fn instance_delay_overrides_global_delay() {
        let settings = Settings {
            delay: Some(3000),
            ..Settings::default()
        };

        assert_eq!(
            info("x", Some(500)).effective_delay(&settings),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            info("x", None).effective_delay(&settings),
            Some(Duration::from_millis(3000))
        );
        assert_eq!(info("x", Some(0)).effective_delay(&settings), None);
        assert_eq!(info("x", None).effective_delay(&Settings::default()), None);
    }

    #[test]
    fn buttons_keep_call_order_and_allow_duplicates() {
        let message = messg("choose", None)
            .button("Yes", |_| {})
            .dismiss_button("No")
            .button("Yes", |_| {});

        let labels: Vec<&str> = message.buttons().iter().map(Button::label).collect();
        assert_eq!(labels, vec!["Yes", "No", "Yes"]);
        assert!(!message.buttons()[1].has_action());
    }

    #[test]
    fn press_passes_label_to_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut message = messg("save?", None).button("Save", move |label| {
            sink.borrow_mut().push(label.to_string());
        });

        assert_eq!(message.press(0), Some("Save".to_string()));
        assert_eq!(message.press(3), None);
        assert_eq!(*seen.borrow(), vec!["Save".to_string()]);
    }

    #[test]
    fn deferred_message_reports_hidden() {
        let message = messg("queued", None);
        assert!(message.is_deferred());
        assert!(message.is_hidden());
    }

    #[test]
    fn begin_hide_is_idempotent() {
        let start = Instant::now();
        let mut message = messg("bye", None);
        message.begin_show(start, SPEED);
        assert!(!message.is_hidden());

        assert!(message.begin_hide(start, SPEED));
        assert!(!message.begin_hide(start + SPEED, SPEED));
        assert!(message.is_hidden());
    }

    #[test]
    fn settle_marks_show_complete() {
        let start = Instant::now();
        let mut message = messg("hi", None);
        message.begin_show(start, SPEED);

        assert_eq!(message.settle(start), None);
        assert_eq!(message.settle(start + SPEED), Some(TransitionKind::Enter));
        assert_eq!(message.phase, Phase::Visible);
        assert_eq!(message.opacity(start + SPEED), 1.0);
    }

    #[test]
    fn unplaced_message_starts_at_its_first_offset() {
        let start = Instant::now();
        let mut message = messg("a", None);
        assert!(message.offset.is_none());
        assert_eq!(message.offset(start), 0.0);

        message.move_to(64.0, start, SPEED);
        assert_eq!(message.offset(start), 64.0);
        assert!(!message.is_animating(start));

        message.move_to(0.0, start, SPEED);
        assert_eq!(message.offset(start), 64.0);
        assert_eq!(message.offset(start + SPEED), 0.0);
    }

    #[test]
    fn deferred_message_leaves_without_fading() {
        let start = Instant::now();
        let mut message = messg("queued", None);

        assert!(message.begin_hide(start, SPEED));
        assert_eq!(message.transition_deadline(), Some(start));
    }
}

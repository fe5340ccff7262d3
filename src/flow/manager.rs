// SPDX-License-Identifier: MPL-2.0
//! Message flow management.
//!
//! The [`Flow`] owns every active message, one [`Slot`] per screen position,
//! the auto-hide timers and the [`Settings`]. It enforces the `max` capacity,
//! queues overflow, promotes queued messages in arrival order and keeps stack
//! offsets contiguous.
//!
//! Time never advances on its own: callers pass the current [`Instant`] to
//! every operation and drive completions with [`Flow::tick`]. A hidden
//! message is only removed by a later tick, once its hide transition has
//! completed.

use super::animation::TransitionKind;
use super::message::{Message, MessageId};
use super::position::Position;
use super::slot::{Membership, Slot};
use super::timer::Timers;
use crate::config::Settings;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// UI interactions routed to the flow.
#[derive(Debug, Clone)]
pub enum Action {
    /// A button on a message was pressed.
    Pressed { id: MessageId, index: usize },
    /// The close control or the body of a message was clicked.
    Dismiss(MessageId),
    /// Periodic tick carrying the current time.
    Tick(Instant),
}

/// Lifecycle notifications produced by the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A message started its show transition right after being pushed.
    Shown(MessageId),
    /// A queued message got a free place and started showing.
    Promoted(MessageId),
    /// A message started its hide transition.
    Hiding(MessageId),
    /// A message finished hiding and left the flow.
    Hidden(MessageId),
    /// A button was pressed; the message is hiding.
    ButtonPressed { id: MessageId, label: String },
}

/// Manages the slots, queues and timers of every active message.
#[derive(Debug)]
pub struct Flow {
    settings: Settings,
    messages: HashMap<MessageId, Message>,
    slots: BTreeMap<Position, Slot>,
    timers: Timers,
    events: Vec<Event>,
    /// Latest instant seen by any operation; used for rendering.
    now: Instant,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Flow {
    /// Creates an empty flow with the given settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            messages: HashMap::new(),
            slots: BTreeMap::new(),
            timers: Timers::new(),
            events: Vec::new(),
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the settings.
    ///
    /// Changes apply to operations performed afterwards; messages already
    /// laid out keep their place until [`Flow::reposition`] is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Registers a message in the slot of the current `position` setting.
    ///
    /// The message starts showing immediately if its slot has room,
    /// otherwise it waits in the slot's queue and reports hidden.
    pub fn push(&mut self, mut message: Message, now: Instant) -> Handle<'_> {
        self.observe(now);
        let id = message.id();
        let position = self.settings.position;
        message.assign_slot(position);
        self.messages.insert(id, message);

        let slot = self.slots.entry(position).or_default();
        if self.settings.has_capacity(slot.visible_len()) {
            slot.push_visible(id);
            self.start_show(id, now);
            self.events.push(Event::Shown(id));
            self.layout(position, now);
            tracing::debug!(?id, %position, "message shown");
        } else {
            slot.push_deferred(id);
            tracing::debug!(
                ?id,
                %position,
                queued = slot.deferred_len(),
                "slot full, message deferred"
            );
        }

        Handle { flow: self, id }
    }

    /// Returns a handle to a registered message.
    ///
    /// Handles to messages that already left the flow are inert.
    pub fn message(&mut self, id: MessageId) -> Handle<'_> {
        Handle { flow: self, id }
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(&id)
    }

    /// Whether the message is hidden. Unknown and released messages are.
    #[must_use]
    pub fn is_hidden(&self, id: MessageId) -> bool {
        self.messages.get(&id).is_none_or(Message::is_hidden)
    }

    /// Starts the hide transition of a message.
    ///
    /// Cancels its auto-hide timer and runs the hide callback. The message
    /// stays in its slot until the transition completes. Returns `false` if
    /// the message is unknown or already hiding.
    pub fn hide(&mut self, id: MessageId, now: Instant) -> bool {
        self.observe(now);
        let speed = self.settings.speed();
        let Some(message) = self.messages.get_mut(&id) else {
            return false;
        };
        if !message.begin_hide(now, speed) {
            return false;
        }
        let on_hide = message.take_on_hide();
        self.timers.cancel(id);
        self.events.push(Event::Hiding(id));
        tracing::debug!(?id, "message hiding");
        if let Some(on_hide) = on_hide {
            on_hide();
        }
        true
    }

    /// Shows a queued message if its slot has room again.
    ///
    /// Promotion keeps arrival order, so older queued messages of the same
    /// slot are shown first. Returns whether the message is now shown.
    pub fn show(&mut self, id: MessageId, now: Instant) -> bool {
        self.observe(now);
        let Some(message) = self.messages.get(&id) else {
            return false;
        };
        if !message.is_deferred() {
            return !message.is_hidden();
        }
        let position = message.slot();
        if self.promote(position, now) {
            self.layout(position, now);
        }
        !self.is_hidden(id)
    }

    /// Presses a button: runs its callback with the label, then hides the message.
    pub fn press(&mut self, id: MessageId, index: usize, now: Instant) -> bool {
        let Some(message) = self.messages.get_mut(&id) else {
            return false;
        };
        if message.is_hidden() {
            return false;
        }
        let Some(label) = message.press(index) else {
            return false;
        };
        tracing::debug!(?id, %label, "button pressed");
        self.events.push(Event::ButtonPressed { id, label });
        self.hide(id, now)
    }

    /// Hides a message after a click on its close control or body.
    pub fn dismiss(&mut self, id: MessageId, now: Instant) -> bool {
        if self.is_hidden(id) {
            return false;
        }
        self.hide(id, now)
    }

    /// Starts hiding every shown and queued message in every slot.
    ///
    /// Pending auto-hide timers are cancelled and each hide callback fires
    /// right away.
    pub fn clean(&mut self, now: Instant) {
        let mut ids: Vec<MessageId> = self.messages.keys().copied().collect();
        ids.sort_unstable();
        let count = ids.iter().filter(|id| self.hide(**id, now)).count();
        tracing::info!(count, "cleaning all messages");
    }

    /// Recomputes stack offsets in every slot from the current settings.
    ///
    /// Membership is unchanged: messages keep their slot.
    pub fn reposition(&mut self, now: Instant) {
        self.observe(now);
        let positions: Vec<Position> = self.slots.keys().copied().collect();
        for position in positions {
            self.layout(position, now);
        }
    }

    /// Advances the flow to `now`.
    ///
    /// Fires due auto-hide timers (each hide starts at its deadline), then
    /// completes transitions in deadline order: finished shows settle,
    /// finished hides leave the flow, freeing room for queued messages. Repeats until nothing is due and returns the events
    /// produced since the previous call.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.observe(now);
        loop {
            let mut progressed = false;

            for (id, deadline) in self.timers.take_due(now) {
                tracing::debug!(?id, "auto-hide delay elapsed");
                progressed |= self.hide(id, deadline);
            }

            let mut due: Vec<(Instant, MessageId)> = self
                .messages
                .values()
                .filter_map(|m| m.transition_deadline().map(|at| (at, m.id())))
                .filter(|(at, _)| *at <= now)
                .collect();
            due.sort_unstable();

            for (at, id) in due {
                let Some(message) = self.messages.get_mut(&id) else {
                    continue;
                };
                match message.settle(now) {
                    Some(TransitionKind::Enter) => progressed = true,
                    Some(TransitionKind::Leave) => {
                        self.release(id, at);
                        progressed = true;
                    }
                    None => {}
                }
            }

            if !progressed {
                break;
            }
        }
        std::mem::take(&mut self.events)
    }

    /// Routes a UI interaction.
    pub fn update(&mut self, action: &Action) -> Vec<Event> {
        match action {
            Action::Pressed { id, index } => {
                self.press(*id, *index, Instant::now());
            }
            Action::Dismiss(id) => {
                self.dismiss(*id, Instant::now());
            }
            Action::Tick(now) => return self.tick(*now),
        }
        std::mem::take(&mut self.events)
    }

    /// Shown messages of a slot, in arrival order.
    pub fn visible(&self, position: Position) -> impl Iterator<Item = &Message> {
        self.slots
            .get(&position)
            .into_iter()
            .flat_map(|slot| slot.visible().iter())
            .filter_map(|id| self.messages.get(id))
    }

    /// Queued messages of a slot, oldest first.
    pub fn deferred(&self, position: Position) -> impl Iterator<Item = &Message> {
        self.slots
            .get(&position)
            .into_iter()
            .flat_map(|slot| slot.deferred())
            .filter_map(|id| self.messages.get(&id))
    }

    /// Positions that currently hold at least one message.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(position, _)| *position)
    }

    #[must_use]
    pub fn visible_count(&self, position: Position) -> usize {
        self.slots.get(&position).map_or(0, Slot::visible_len)
    }

    #[must_use]
    pub fn deferred_count(&self, position: Position) -> usize {
        self.slots.get(&position).map_or(0, Slot::deferred_len)
    }

    /// Returns whether there are any messages (shown or queued).
    #[must_use]
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Whether ticks are needed: a timer is armed or something is moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timers.is_empty() || self.messages.values().any(|m| m.is_animating(self.now))
    }

    /// Latest instant observed by the flow.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    fn observe(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    fn start_show(&mut self, id: MessageId, now: Instant) {
        let speed = self.settings.speed();
        let Some(message) = self.messages.get_mut(&id) else {
            return;
        };
        message.begin_show(now, speed);
        if let Some(delay) = message.effective_delay(&self.settings) {
            self.timers.schedule(id, now + delay);
        }
    }

    /// Moves queued messages of a slot into view while it has room.
    fn promote(&mut self, position: Position, now: Instant) -> bool {
        let mut promoted = Vec::new();
        if let Some(slot) = self.slots.get_mut(&position) {
            while self.settings.has_capacity(slot.visible_len()) {
                let messages = &self.messages;
                let next = slot.pop_deferred_where(|id| {
                    messages.get(&id).is_some_and(|m| !m.is_hiding())
                });
                let Some(id) = next else {
                    break;
                };
                slot.push_visible(id);
                promoted.push(id);
            }
        }

        for id in &promoted {
            self.start_show(*id, now);
            self.events.push(Event::Promoted(*id));
            tracing::debug!(?id, %position, "deferred message promoted");
        }
        !promoted.is_empty()
    }

    /// Removes a message whose hide transition completed.
    fn release(&mut self, id: MessageId, now: Instant) {
        let Some(message) = self.messages.remove(&id) else {
            return;
        };
        self.timers.cancel(id);

        let position = message.slot();
        let membership = self
            .slots
            .get_mut(&position)
            .and_then(|slot| slot.remove(id));
        self.events.push(Event::Hidden(id));
        tracing::debug!(?id, %position, ?membership, "message released");

        if membership == Some(Membership::Visible) {
            self.promote(position, now);
            self.layout(position, now);
        }
        if self.slots.get(&position).is_some_and(Slot::is_empty) {
            self.slots.remove(&position);
        }
    }

    /// Re-applies contiguous offsets to the shown messages of a slot.
    fn layout(&mut self, position: Position, now: Instant) {
        let Some(slot) = self.slots.get(&position) else {
            return;
        };
        let speed = self.settings.speed();
        for (id, offset) in slot.offsets(&self.settings) {
            if let Some(message) = self.messages.get_mut(&id) {
                message.move_to(offset, now, speed);
            }
        }
    }
}

/// Chainable access to one message of a [`Flow`].
///
/// Every method is a no-op once the message has left the flow.
pub struct Handle<'a> {
    flow: &'a mut Flow,
    id: MessageId,
}

impl Handle<'_> {
    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.flow.is_hidden(self.id)
    }

    /// Appends a button that runs `on_click` with its label, then hides the message.
    pub fn button(self, label: impl Into<String>, on_click: impl FnMut(&str) + 'static) -> Self {
        if let Some(message) = self.flow.messages.get_mut(&self.id) {
            message.push_button(label.into(), Some(Box::new(on_click)));
        }
        self
    }

    /// Appends a button that only hides the message.
    pub fn dismiss_button(self, label: impl Into<String>) -> Self {
        if let Some(message) = self.flow.messages.get_mut(&self.id) {
            message.push_button(label.into(), None);
        }
        self
    }

    /// Registers the callback run once when the message starts hiding.
    ///
    /// The last registration wins. Registrations made after the hide
    /// started are dropped.
    pub fn on_hide(self, on_hide: impl FnOnce() + 'static) -> Self {
        if let Some(message) = self.flow.messages.get_mut(&self.id) {
            message.set_on_hide(Box::new(on_hide));
        }
        self
    }

    /// Shows the message if it is queued and its slot has room.
    pub fn show(self, now: Instant) -> Self {
        self.flow.show(self.id, now);
        self
    }

    /// Starts hiding the message. Repeated calls are no-ops.
    pub fn hide(self, now: Instant) {
        self.flow.hide(self.id, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::message::{info, messg, success};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    const SPEED: Duration = Duration::from_millis(250);

    fn flow_with_max(max: usize) -> Flow {
        Flow::new(Settings {
            max: Some(max),
            ..Settings::default()
        })
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, move || sink.set(sink.get() + 1))
    }

    #[test]
    fn new_flow_is_empty() {
        let flow = Flow::default();
        assert!(!flow.has_messages());
        assert_eq!(flow.visible_count(Position::Top), 0);
        assert_eq!(flow.deferred_count(Position::Top), 0);
        assert!(!flow.is_animating());
    }

    #[test]
    fn push_shows_when_space_available() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let id = flow.push(messg("hello", None), start).id();

        assert!(!flow.is_hidden(id));
        assert_eq!(flow.visible_count(Position::Top), 1);
        assert_eq!(flow.tick(start), vec![Event::Shown(id)]);
    }

    #[test]
    fn push_defers_when_slot_is_full() {
        let start = Instant::now();
        let mut flow = flow_with_max(2);
        flow.push(messg("a", None), start);
        flow.push(messg("b", None), start);
        let queued = flow.push(messg("c", None), start).id();

        assert_eq!(flow.visible_count(Position::Top), 2);
        assert_eq!(flow.deferred_count(Position::Top), 1);
        assert!(flow.is_hidden(queued));
    }

    #[test]
    fn hide_is_not_synchronous_removal() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let id = flow.push(messg("a", None), start).id();

        assert!(flow.hide(id, start));
        assert!(flow.is_hidden(id));
        assert!(flow.get(id).is_some());
        assert_eq!(flow.visible_count(Position::Top), 1);

        flow.tick(start + SPEED);
        assert!(flow.get(id).is_none());
        assert_eq!(flow.visible_count(Position::Top), 0);
    }

    #[test]
    fn hide_twice_fires_callback_once() {
        let start = Instant::now();
        let (count, on_hide) = counter();
        let mut flow = Flow::default();
        let id = flow.push(messg("a", None), start).on_hide(on_hide).id();

        assert!(flow.hide(id, start));
        assert!(!flow.hide(id, start + Duration::from_millis(10)));
        flow.tick(start + SPEED * 4);
        flow.message(id).hide(start + SPEED * 5);
        flow.tick(start + SPEED * 10);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn last_on_hide_registration_wins() {
        let start = Instant::now();
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        let mut flow = Flow::default();
        let id = flow
            .push(messg("a", None), start)
            .on_hide(first_cb)
            .on_hide(second_cb)
            .id();

        flow.hide(id, start);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn release_promotes_oldest_deferred_first() {
        let start = Instant::now();
        let mut flow = flow_with_max(1);
        let shown = flow.push(messg("shown", None), start).id();
        let a = flow.push(messg("a", None), start).id();
        let b = flow.push(messg("b", None), start).id();

        flow.hide(shown, start);
        let events = flow.tick(start + SPEED);

        assert!(events.contains(&Event::Promoted(a)));
        assert!(!events.contains(&Event::Promoted(b)));
        assert!(!flow.is_hidden(a));
        assert!(flow.is_hidden(b));
        assert_eq!(flow.deferred_count(Position::Top), 1);
    }

    #[test]
    fn lowered_max_blocks_promotion_until_below_cap() {
        let start = Instant::now();
        let mut flow = flow_with_max(3);
        let shown: Vec<MessageId> = (0..3)
            .map(|i| flow.push(messg(format!("{i}"), None), start).id())
            .collect();

        flow.settings_mut().max = Some(1);
        let queued = flow.push(messg("queued", None), start).id();
        assert!(flow.is_hidden(queued));

        let mut now = start;
        for id in &shown[..2] {
            flow.hide(*id, now);
            now += SPEED;
            let events = flow.tick(now);
            assert!(!events.contains(&Event::Promoted(queued)));
            assert!(flow.is_hidden(queued));
        }
        assert_eq!(flow.visible_count(Position::Top), 1);

        flow.hide(shown[2], now);
        let events = flow.tick(now + SPEED);
        assert!(events.contains(&Event::Promoted(queued)));
        assert_eq!(flow.visible_count(Position::Top), 1);
    }

    #[test]
    fn hiding_message_keeps_its_place_until_released() {
        let start = Instant::now();
        let mut flow = flow_with_max(1);
        let first = flow.push(messg("first", None), start).id();
        let queued = flow.push(messg("queued", None), start).id();

        flow.hide(first, start);
        flow.tick(start + SPEED / 2);

        assert_eq!(flow.visible_count(Position::Top), 1);
        assert!(flow.is_hidden(queued));
    }

    #[test]
    fn auto_hide_fires_after_effective_delay() {
        let start = Instant::now();
        let (count, on_hide) = counter();
        let mut flow = Flow::new(Settings {
            delay: Some(3000),
            ..Settings::default()
        });
        let id = flow.push(info("later", None), start).on_hide(on_hide).id();

        flow.tick(start + Duration::from_millis(2999));
        assert!(!flow.is_hidden(id));

        flow.tick(start + Duration::from_millis(3000));
        assert!(flow.is_hidden(id));
        assert_eq!(count.get(), 1);
        assert!(flow.get(id).is_some());

        flow.tick(start + Duration::from_millis(3000) + SPEED);
        assert_eq!(count.get(), 1);
        assert!(flow.get(id).is_none());
    }

    #[test]
    fn manual_hide_cancels_timer() {
        let start = Instant::now();
        let (count, on_hide) = counter();
        let mut flow = Flow::default();
        let id = flow
            .push(success("saved", Some(1000)), start)
            .on_hide(on_hide)
            .id();

        flow.hide(id, start + Duration::from_millis(100));
        assert!(flow.timers.is_empty());
        flow.tick(start + Duration::from_secs(5));

        assert_eq!(count.get(), 1);
        assert!(flow.timers.is_empty());
    }

    #[test]
    fn late_tick_processes_chained_completions() {
        let start = Instant::now();
        let mut flow = Flow::new(Settings {
            max: Some(1),
            delay: Some(1000),
            ..Settings::default()
        });
        let first = flow.push(messg("first", None), start).id();
        let second = flow.push(messg("second", None), start).id();

        // first hides at 1000, leaves at 1250; second shows at 1250, hides at 2250, leaves at 2500.
        let events = flow.tick(start + Duration::from_secs(10));

        assert!(events.contains(&Event::Hidden(first)));
        assert!(events.contains(&Event::Promoted(second)));
        assert!(events.contains(&Event::Hidden(second)));
        assert!(!flow.has_messages());
    }

    #[test]
    fn offsets_follow_arrival_order() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let stride = flow.settings().stride();
        let a = flow.push(messg("a", None), start).id();
        let b = flow.push(messg("b", None), start).id();
        let c = flow.push(messg("c", None), start).id();

        let settled = start + SPEED;
        let offset = |flow: &Flow, id| flow.get(id).map(|m| m.offset(settled));
        assert_eq!(offset(&flow, c), Some(0.0));
        assert_eq!(offset(&flow, b), Some(stride));
        assert_eq!(offset(&flow, a), Some(2.0 * stride));

        flow.hide(b, settled);
        let done = settled + SPEED;
        flow.tick(done);
        let after = done + SPEED;
        assert_eq!(flow.get(c).map(|m| m.offset(after)), Some(0.0));
        assert_eq!(flow.get(a).map(|m| m.offset(after)), Some(stride));
    }

    #[test]
    fn show_promotes_after_capacity_grows() {
        let start = Instant::now();
        let mut flow = flow_with_max(1);
        flow.push(messg("a", None), start);
        let b = flow.push(messg("b", None), start).id();
        assert!(flow.is_hidden(b));

        assert!(!flow.show(b, start));

        flow.settings_mut().max = Some(2);
        let handle = flow.message(b).show(start);
        assert_eq!(handle.id(), b);
        assert!(!handle.is_hidden());
    }

    #[test]
    fn show_on_hidden_message_is_noop() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let id = flow.push(messg("a", None), start).id();
        flow.hide(id, start);

        assert!(!flow.show(id, start));
        assert!(flow.is_hidden(id));
    }

    #[test]
    fn press_runs_callback_then_hides() {
        let start = Instant::now();
        let pressed = Rc::new(Cell::new(false));
        let sink = Rc::clone(&pressed);
        let mut flow = Flow::default();
        let id = flow
            .push(messg("undo?", None), start)
            .button("Undo", move |label| {
                assert_eq!(label, "Undo");
                sink.set(true);
            })
            .id();

        assert!(flow.press(id, 0, start));
        assert!(pressed.get());
        assert!(flow.is_hidden(id));
        assert!(!flow.press(id, 0, start));

        let events = flow.tick(start + SPEED);
        assert!(events.contains(&Event::ButtonPressed {
            id,
            label: "Undo".to_string()
        }));
        assert!(events.contains(&Event::Hidden(id)));
    }

    #[test]
    fn handle_on_released_message_is_inert() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let id = flow.push(messg("a", None), start).id();
        flow.hide(id, start);
        flow.tick(start + SPEED);

        let handle = flow.message(id).dismiss_button("Close").show(start + SPEED);
        assert!(handle.is_hidden());
        assert!(!flow.has_messages());
    }

    #[test]
    fn clean_hides_everything_across_slots() {
        let start = Instant::now();
        let mut flow = flow_with_max(1);
        let (count, on_hide) = counter();
        let a = flow.push(messg("a", None), start).on_hide(on_hide).id();
        flow.settings_mut().position = Position::BottomLeft;
        let b = flow.push(messg("b", None), start).id();
        let queued = flow.push(messg("queued", None), start).id();

        flow.clean(start);
        assert_eq!(count.get(), 1);
        assert!(flow.is_hidden(a));
        assert!(flow.is_hidden(b));
        assert!(flow.is_hidden(queued));

        let events = flow.tick(start + SPEED);
        assert!(!events.iter().any(|e| matches!(e, Event::Promoted(_))));
        assert!(!flow.has_messages());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reposition_keeps_membership() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let a = flow.push(messg("a", None), start).id();
        let b = flow.push(messg("b", None), start).id();

        flow.settings_mut().flow = false;
        flow.settings_mut().position = Position::Bottom;
        flow.reposition(start);

        assert_eq!(flow.visible_count(Position::Top), 2);
        assert_eq!(flow.visible_count(Position::Bottom), 0);
        assert_eq!(flow.get(a).map(Message::target_offset), Some(0.0));
        assert_eq!(flow.get(b).map(Message::target_offset), Some(0.0));
    }

    #[test]
    fn update_routes_dismiss() {
        let start = Instant::now();
        let mut flow = Flow::default();
        let id = flow.push(messg("a", None), start).id();

        let events = flow.update(&Action::Dismiss(id));
        assert!(events.contains(&Event::Hiding(id)));
        assert!(flow.is_hidden(id));
    }
}

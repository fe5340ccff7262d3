// SPDX-License-Identifier: MPL-2.0
//! One-shot auto-hide deadlines.
//!
//! Every message owns at most one deadline. Arming a message twice replaces
//! the previous deadline, so a re-shown message can never hide twice.

use super::message::MessageId;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Timers {
    deadlines: HashMap<MessageId, Instant>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the auto-hide deadline for `id`.
    pub fn schedule(&mut self, id: MessageId, deadline: Instant) {
        self.deadlines.insert(id, deadline);
    }

    /// Cancels the deadline for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: MessageId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    #[cfg(test)]
    fn deadline(&self, id: MessageId) -> Option<Instant> {
        self.deadlines.get(&id).copied()
    }

    /// Removes and returns every deadline reached at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(MessageId, Instant)> {
        let mut due: Vec<(MessageId, Instant)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*id, *deadline))
            .collect();

        for (id, _) in &due {
            self.deadlines.remove(id);
        }

        due.sort_by_key(|(id, deadline)| (*deadline, *id));
        due
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.deadlines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn take_due_returns_only_expired_deadlines_in_order() {
        let start = Instant::now();
        let (a, b, c) = (MessageId::new(), MessageId::new(), MessageId::new());
        let mut timers = Timers::new();
        timers.schedule(a, start + Duration::from_millis(300));
        timers.schedule(b, start + Duration::from_millis(100));
        timers.schedule(c, start + Duration::from_millis(900));

        let due = timers.take_due(start + Duration::from_millis(500));

        let ids: Vec<MessageId> = due.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(timers.len(), 1);
        assert!(timers.deadline(c).is_some());
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let id = MessageId::new();
        let mut timers = Timers::new();
        timers.schedule(id, start);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.take_due(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_previous_deadline() {
        let start = Instant::now();
        let id = MessageId::new();
        let mut timers = Timers::new();
        timers.schedule(id, start + Duration::from_millis(100));
        timers.schedule(id, start + Duration::from_millis(800));

        assert!(timers.take_due(start + Duration::from_millis(500)).is_empty());
        assert_eq!(timers.take_due(start + Duration::from_millis(800)).len(), 1);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Membership of one screen position: shown messages and the waiting queue.

use super::message::MessageId;
use crate::config::Settings;
use std::collections::VecDeque;

/// Sequence a message was removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Visible,
    Deferred,
}

#[derive(Debug, Default)]
pub struct Slot {
    /// Shown messages in arrival order (oldest first, newest at the anchor).
    visible: Vec<MessageId>,
    /// Messages waiting for capacity, oldest first.
    deferred: VecDeque<MessageId>,
}

impl Slot {
    #[must_use]
    pub fn visible(&self) -> &[MessageId] {
        &self.visible
    }

    pub fn deferred(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.deferred.iter().copied()
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.deferred.is_empty()
    }

    pub fn push_visible(&mut self, id: MessageId) {
        self.visible.push(id);
    }

    pub fn push_deferred(&mut self, id: MessageId) {
        self.deferred.push_back(id);
    }

    /// Removes and returns the oldest deferred message accepted by `eligible`.
    pub fn pop_deferred_where(
        &mut self,
        mut eligible: impl FnMut(MessageId) -> bool,
    ) -> Option<MessageId> {
        let index = self.deferred.iter().position(|id| eligible(*id))?;
        self.deferred.remove(index)
    }

    /// Removes `id` from whichever sequence holds it.
    pub fn remove(&mut self, id: MessageId) -> Option<Membership> {
        if let Some(index) = self.visible.iter().position(|v| *v == id) {
            self.visible.remove(index);
            return Some(Membership::Visible);
        }
        if let Some(index) = self.deferred.iter().position(|d| *d == id) {
            self.deferred.remove(index);
            return Some(Membership::Deferred);
        }
        None
    }

    /// Stack offsets for every shown message, contiguous from the anchor edge.
    ///
    /// The newest message sits at offset zero; without flow every message does.
    #[must_use]
    pub fn offsets(&self, settings: &Settings) -> Vec<(MessageId, f32)> {
        let stride = if settings.flow { settings.stride() } else { 0.0 };
        self.visible
            .iter()
            .rev()
            .enumerate()
            .map(|(index, id)| (*id, index as f32 * stride))
            .collect()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Time-based transitions for showing, hiding and moving toasts.
//!
//! A [`Transition`] gates the next lifecycle step of a message: the flow
//! manager only promotes, removes or repositions once the transition
//! reports completion. A [`Motion`] interpolates a stack offset when the
//! slot is repositioned.

use std::time::{Duration, Instant};

/// Direction of a visibility transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fading in after registration or promotion.
    Enter,
    /// Fading out after a hide trigger.
    Leave,
}

/// A visibility transition with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    kind: TransitionKind,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn enter(started_at: Instant, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Enter,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn leave(started_at: Instant, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Leave,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Instant at which the completion signal fires.
    #[must_use]
    pub fn completes_at(&self) -> Instant {
        self.started_at + self.duration
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now >= self.completes_at()
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity of the toast at `now`: rises while entering, falls while leaving.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        match self.kind {
            TransitionKind::Enter => progress,
            TransitionKind::Leave => 1.0 - progress,
        }
    }
}

/// Interpolated movement of a stack offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Motion {
    /// A motion that is already at rest on `offset`.
    #[must_use]
    pub fn resting(offset: f32, now: Instant) -> Self {
        Self {
            from: offset,
            to: offset,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Retargets the motion, continuing from wherever it currently is.
    ///
    /// Retargeting to the current target keeps the running motion untouched.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        if (self.to - to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_moving(&self, now: Instant) -> bool {
        now < self.started_at + self.duration
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Cancelable delayed-message bookkeeping.
//!
//! The widget schedules real delays through the runtime, but an in-flight
//! delay cannot be recalled once its future is spawned. Instead every
//! scheduled delay carries a [`TimerToken`] stamped with the registry's
//! current generation; bumping the generation on teardown invalidates
//! every outstanding token at once, and a stale token firing later is
//! swallowed before it can touch state.

/// What a scheduled delay is for. Carried inside the completion message
/// so the widget can route the firing without extra lookup state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal arming: initial layout has settled, start observing.
    Settle,
    /// Staggered reveal of the card at this index.
    Reveal(usize),
    /// One frame has passed since the review surface was mounted.
    FrameCommit,
    /// Fallback completion of the review surface's closing fade.
    SurfaceFallback,
}

/// A handle for one scheduled delay, valid for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    pub kind: TimerKind,
}

/// Issues and validates timer tokens for one widget instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timers {
    generation: u64,
}

impl Timers {
    /// Issues a token bound to the current generation.
    #[must_use]
    pub fn issue(&self, kind: TimerKind) -> TimerToken {
        TimerToken {
            generation: self.generation,
            kind,
        }
    }

    /// Whether a fired token is still current. Stale tokens must be
    /// dropped without side effects.
    #[must_use]
    pub fn accepts(&self, token: TimerToken) -> bool {
        token.generation == self.generation
    }

    /// Invalidates every outstanding token. Called on teardown and
    /// whenever pending delays must be abandoned wholesale.
    pub fn invalidate_all(&mut self) {
        self.generation += 1;
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Open/close state machine for the review surface.
//!
//! The surface is a modal layer listing every image with its caption. It
//! mounts hidden, starts its opening fade one frame later (starting the
//! fade on the mounting frame would skip the transition), and tears down
//! only once the closing fade has finished, signaled by the fade
//! animation reaching zero or by a fallback timer of the same duration.
//! Keyboard focus is modeled explicitly: the surface takes it while
//! mounted and hands it back to the trigger exactly once per close cycle.

/// Lifecycle of the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hidden; the cycle's initial and final state.
    Closed,
    /// Mounted, waiting for the next frame to start the opening fade.
    Opening,
    /// Fully interactive.
    Open,
    /// Fade-out in flight; still mounted.
    Closing,
}

/// Which logical element owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The stack's activation control.
    Trigger,
    /// The modal review surface.
    Surface,
}

/// Inputs to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The trigger was activated.
    OpenRequested,
    /// One frame has elapsed since the surface mounted.
    FrameCommitted,
    /// Close button, backdrop press, or intercepted cancel key.
    CloseRequested,
    /// The closing fade finished (animation or fallback timer).
    TransitionFinished,
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Mount the surface hidden and schedule a frame-commit signal.
    Mount,
    /// Start the opening fade.
    BeginOpening,
    /// Start the closing fade and schedule the fallback completion timer.
    BeginClosing,
    /// Hide the surface; keyboard focus has returned to the trigger.
    Finish,
}

/// Controller for one widget instance's review surface.
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    phase: Phase,
    focus: FocusTarget,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
            focus: FocusTarget::Trigger,
        }
    }
}

impl Controller {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Whether the surface occupies the layer stack (any non-closed phase).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Target opacity of the surface fade for the current phase.
    #[must_use]
    pub fn fade_target(&self) -> f32 {
        match self.phase {
            Phase::Open => 1.0,
            Phase::Closed | Phase::Opening | Phase::Closing => 0.0,
        }
    }

    /// Advances the machine. Invalid inputs for the current phase are
    /// swallowed (`Effect::None`), which is what makes rapid repeated
    /// activation and duplicated completion signals safe.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenRequested => match self.phase {
                Phase::Closed => {
                    self.phase = Phase::Opening;
                    self.focus = FocusTarget::Surface;
                    Effect::Mount
                }
                Phase::Opening | Phase::Open | Phase::Closing => Effect::None,
            },
            Message::FrameCommitted => match self.phase {
                Phase::Opening => {
                    self.phase = Phase::Open;
                    Effect::BeginOpening
                }
                // A frame commit racing a quick close is stale.
                Phase::Closed | Phase::Open | Phase::Closing => Effect::None,
            },
            Message::CloseRequested => match self.phase {
                Phase::Open | Phase::Opening => {
                    self.phase = Phase::Closing;
                    Effect::BeginClosing
                }
                Phase::Closed | Phase::Closing => Effect::None,
            },
            Message::TransitionFinished => match self.phase {
                Phase::Closing => {
                    self.phase = Phase::Closed;
                    self.focus = FocusTarget::Trigger;
                    Effect::Finish
                }
                Phase::Closed | Phase::Opening | Phase::Open => Effect::None,
            },
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! One-shot staggered entrance reveal.
//!
//! The animator arms itself shortly after mount (so layout has committed),
//! watches for the stack's bounds to intersect the viewport, and on the
//! first intersection schedules every card's reveal with a per-index
//! delay. Triggering is terminal: scrolling away and back never replays
//! the entrance, and reveal insertions are idempotent so delayed firings
//! may arrive in any order.

use crate::config::{REVEAL_MARGIN, REVEAL_STAGGER};
use iced::Rectangle;
use std::collections::BTreeSet;
use std::time::Duration;

/// Lifecycle of the reveal observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted; observation not yet active.
    Idle,
    /// Observing viewport intersection.
    Armed,
    /// Intersection seen; reveals scheduled. Terminal.
    Triggered,
}

/// Per-card reveal delays produced when the animator triggers.
pub type RevealSchedule = Vec<(usize, Duration)>;

/// Whether the stack's bounds overlap the viewport, pre-triggering within
/// a margin around it so the entrance starts slightly before the stack
/// scrolls into view.
#[must_use]
pub fn intersects(stack: Rectangle, viewport: Rectangle) -> bool {
    let reach = Rectangle {
        x: viewport.x - REVEAL_MARGIN,
        y: viewport.y - REVEAL_MARGIN,
        width: viewport.width + 2.0 * REVEAL_MARGIN,
        height: viewport.height + 2.0 * REVEAL_MARGIN,
    };
    reach.intersects(&stack)
}

/// State machine driving the staggered entrance reveal of one stack.
#[derive(Debug, Clone)]
pub struct Animator {
    phase: Phase,
    revealed: BTreeSet<usize>,
    count: usize,
}

impl Animator {
    /// Creates an idle animator for a stack of `count` cards.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            phase: Phase::Idle,
            revealed: BTreeSet::new(),
            count,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Indices whose entrance has been released so far.
    #[must_use]
    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    /// Starts observing. Valid once, from `Idle`; returns whether the
    /// transition happened.
    pub fn arm(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Armed;
            true
        } else {
            false
        }
    }

    /// Feeds an observation of the stack's bounds against the viewport.
    /// Returns the reveal schedule on the first intersection while armed.
    pub fn observe(&mut self, stack: Rectangle, viewport: Rectangle) -> Option<RevealSchedule> {
        if intersects(stack, viewport) {
            self.intersection_observed()
        } else {
            None
        }
    }

    /// Records that the stack is known to intersect the viewport (e.g.
    /// from a visible-bounds probe). Triggers at most once.
    pub fn intersection_observed(&mut self) -> Option<RevealSchedule> {
        if self.phase != Phase::Armed {
            return None;
        }
        self.phase = Phase::Triggered;

        Some(
            (0..self.count)
                .map(|i| (i, REVEAL_STAGGER * i as u32))
                .collect(),
        )
    }

    /// Inserts `index` into the revealed set. Idempotent; out-of-range
    /// indices are dropped so the set invariant holds.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.revealed.insert(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    const VIEWPORT: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn new_animator_is_idle_and_unrevealed() {
        let animator = Animator::new(4);
        assert_eq!(animator.phase(), Phase::Idle);
        assert!(animator.revealed().is_empty());
    }

    #[test]
    fn arming_is_one_way() {
        let mut animator = Animator::new(4);
        assert!(animator.arm());
        assert!(!animator.arm());
        assert_eq!(animator.phase(), Phase::Armed);
    }

    #[test]
    fn observation_before_arming_never_triggers() {
        let mut animator = Animator::new(4);
        let inside = rect(100.0, 100.0, 300.0, 180.0);
        assert_eq!(animator.observe(inside, VIEWPORT), None);
        assert_eq!(animator.phase(), Phase::Idle);
    }

    #[test]
    fn trigger_produces_staggered_schedule() {
        let mut animator = Animator::new(4);
        animator.arm();

        let schedule = animator
            .observe(rect(100.0, 100.0, 300.0, 180.0), VIEWPORT)
            .expect("intersection should trigger");

        let expected: RevealSchedule = vec![
            (0, Duration::from_millis(0)),
            (1, Duration::from_millis(100)),
            (2, Duration::from_millis(200)),
            (3, Duration::from_millis(300)),
        ];
        assert_eq!(schedule, expected);
        assert_eq!(animator.phase(), Phase::Triggered);
    }

    #[test]
    fn trigger_is_one_shot() {
        let mut animator = Animator::new(4);
        animator.arm();
        let inside = rect(100.0, 100.0, 300.0, 180.0);
        assert!(animator.observe(inside, VIEWPORT).is_some());

        // Scrolling out and back in must not replay the entrance.
        let outside = rect(100.0, 5000.0, 300.0, 180.0);
        assert_eq!(animator.observe(outside, VIEWPORT), None);
        assert_eq!(animator.observe(inside, VIEWPORT), None);
    }

    #[test]
    fn margin_pre_triggers_near_the_viewport_edge() {
        let mut animator = Animator::new(2);
        animator.arm();

        // 40 px below the viewport: inside the 50 px margin.
        let near = rect(100.0, 640.0, 300.0, 180.0);
        assert!(animator.observe(near, VIEWPORT).is_some());
    }

    #[test]
    fn beyond_the_margin_stays_armed() {
        let mut animator = Animator::new(2);
        animator.arm();

        // 60 px below the viewport: outside the margin.
        let far = rect(100.0, 660.0, 300.0, 180.0);
        assert_eq!(animator.observe(far, VIEWPORT), None);
        assert_eq!(animator.phase(), Phase::Armed);
    }

    #[test]
    fn reveals_are_idempotent_and_bounded() {
        let mut animator = Animator::new(3);
        animator.arm();
        animator.intersection_observed();

        assert!(animator.mark_revealed(1));
        assert!(!animator.mark_revealed(1));
        assert!(!animator.mark_revealed(3)); // out of range

        let revealed: Vec<usize> = animator.revealed().iter().copied().collect();
        assert_eq!(revealed, vec![1]);
    }

    #[test]
    fn out_of_order_firings_converge() {
        let mut animator = Animator::new(4);
        animator.arm();
        animator.intersection_observed();

        for index in [2, 0, 3, 1, 2, 0] {
            animator.mark_revealed(index);
        }
        let revealed: Vec<usize> = animator.revealed().iter().copied().collect();
        assert_eq!(revealed, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_stack_triggers_with_empty_schedule() {
        let mut animator = Animator::new(0);
        animator.arm();
        let schedule = animator.intersection_observed().expect("still triggers");
        assert!(schedule.is_empty());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across the stack's machines: size resolution,
//! layout, gesture navigation feeding the visible window, the staggered
//! reveal, and the review surface's full open/close cycle.

use iced::{Point, Rectangle, Size};
use iced_stack::stack::gesture::{Navigator, Outcome};
use iced_stack::stack::layout::{card_attributes, RotationSeeds};
use iced_stack::stack::reveal;
use iced_stack::stack::review;
use iced_stack::stack::size::{self, NamedRatio, Ratio, SizeConfig};
use iced_stack::stack::{activation_label, timers};
use iced_stack::ui::stylesheet;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn viewport() -> Rectangle {
    Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0))
}

#[test]
fn size_resolution_matches_the_documented_table() {
    let fixed = SizeConfig::Fixed {
        width: 300.0,
        height: 300.0,
    };
    let dims = size::resolve(Some(&fixed));
    assert_eq!(dims.width.to_string(), "300px");
    assert_eq!(dims.height.to_string(), "300px");
    assert_eq!(size::aspect_ratio(Some(&fixed)).as_deref(), Some("300/300"));

    let wide = SizeConfig::AspectRatio {
        width: 300.0,
        ratio: Ratio::Named(NamedRatio::Wide),
    };
    assert_eq!(size::aspect_ratio(Some(&wide)).as_deref(), Some("16/9"));
    assert_eq!(size::resolve(Some(&wide)).height.to_string(), "auto");

    assert_eq!(size::resolve(None).width.to_string(), "100%");
}

#[test]
fn navigation_slides_the_visible_window() {
    let mut gesture = Navigator::default();
    let revealed = BTreeSet::new();
    let mut current = 0;

    // Swipe left on a five-image stack.
    gesture.drag_start(300.0);
    gesture.drag_move(200.0);
    if let Outcome::Navigated(index) = gesture.drag_end(current, 5) {
        current = index;
    }
    assert_eq!(current, 1);

    let cards = card_attributes(5, current, &revealed, None);
    let visible: Vec<usize> = cards.iter().filter(|c| c.visible).map(|c| c.index).collect();
    assert_eq!(visible, vec![1, 2, 3]);

    // The caption follows the window anchor.
    assert!(cards[1].caption_visible);
    assert!(!cards[0].caption_visible);
}

#[test]
fn gesture_boundaries_hold_across_a_session() {
    let mut gesture = Navigator::default();
    let mut current = 0;

    // Below-threshold drag: no navigation.
    gesture.drag_start(100.0);
    gesture.drag_move(140.0);
    assert_eq!(gesture.drag_end(current, 3), Outcome::Tap);
    assert_eq!(current, 0);

    // Backward swipe at the first card: no wraparound.
    gesture.drag_start(100.0);
    gesture.drag_move(160.0);
    assert_eq!(gesture.drag_end(current, 3), Outcome::AtBoundary);

    // Forward to the end, then once more: still clamped.
    for _ in 0..3 {
        gesture.drag_start(300.0);
        gesture.drag_move(200.0);
        if let Outcome::Navigated(index) = gesture.drag_end(current, 3) {
            current = index;
        }
    }
    assert_eq!(current, 2);
}

#[test]
fn stacking_order_always_keeps_the_first_card_on_top() {
    let seeds = RotationSeeds::from_angles([2.0, -3.0, 4.0, -5.0, 6.0]);
    for count in 1..7 {
        let cards = card_attributes(count, 0, &BTreeSet::new(), Some(&seeds));
        assert_eq!(cards[0].z_index, count);
        for pair in cards.windows(2) {
            assert!(pair[0].z_index > pair[1].z_index);
        }
    }
}

#[test]
fn reveal_runs_once_and_converges_out_of_order() {
    let mut animator = reveal::Animator::new(4);
    assert!(animator.arm());

    // Still off-screen beyond the margin: stays armed.
    let below = Rectangle::new(Point::new(0.0, 700.0), Size::new(300.0, 180.0));
    assert_eq!(animator.observe(below, viewport()), None);

    // Scrolling near the edge triggers through the pre-trigger margin.
    let near = Rectangle::new(Point::new(0.0, 630.0), Size::new(300.0, 180.0));
    let schedule = animator.observe(near, viewport()).expect("should trigger");
    assert_eq!(schedule.len(), 4);
    assert_eq!(schedule[3], (3, Duration::from_millis(300)));

    // Delayed insertions may fire in any order, repeatedly.
    for index in [3, 1, 3, 0, 2, 1] {
        animator.mark_revealed(index);
    }
    let revealed: Vec<usize> = animator.revealed().iter().copied().collect();
    assert_eq!(revealed, vec![0, 1, 2, 3]);

    // Scrolling out and back never replays the entrance.
    assert_eq!(animator.observe(below, viewport()), None);
    assert_eq!(animator.observe(near, viewport()), None);
}

#[test]
fn review_cycle_is_idempotent_and_returns_focus_once() {
    let mut controller = review::Controller::default();

    // Double activation produces a single opening.
    assert_eq!(
        controller.handle(review::Message::OpenRequested),
        review::Effect::Mount
    );
    assert_eq!(
        controller.handle(review::Message::OpenRequested),
        review::Effect::None
    );
    controller.handle(review::Message::FrameCommitted);
    assert_eq!(controller.phase(), review::Phase::Open);

    // Close; the fade completion and the fallback timer both fire.
    controller.handle(review::Message::CloseRequested);
    let finishes = (0..2)
        .filter(|_| {
            controller.handle(review::Message::TransitionFinished) == review::Effect::Finish
        })
        .count();
    assert_eq!(finishes, 1);
    assert_eq!(controller.focus(), review::FocusTarget::Trigger);

    // A stray close after the cycle is a no-op.
    assert_eq!(
        controller.handle(review::Message::CloseRequested),
        review::Effect::None
    );
}

#[test]
fn empty_stack_is_a_valid_state_everywhere() {
    assert_eq!(activation_label(0, "Project"), "View 0 Project images");
    assert!(card_attributes(0, 0, &BTreeSet::new(), None).is_empty());

    let mut animator = reveal::Animator::new(0);
    animator.arm();
    let schedule = animator.intersection_observed().expect("still triggers");
    assert!(schedule.is_empty());

    let mut controller = review::Controller::default();
    assert_eq!(
        controller.handle(review::Message::OpenRequested),
        review::Effect::Mount
    );
}

#[test]
fn stylesheet_install_is_shared_across_instances() {
    let first = stylesheet::install();
    let second = stylesheet::install();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn stale_timer_tokens_never_mutate_state() {
    let mut registry = timers::Timers::default();
    let token = registry.issue(timers::TimerKind::Reveal(1));
    registry.invalidate_all();

    let mut animator = reveal::Animator::new(3);
    animator.arm();
    animator.intersection_observed();

    // The owning instance tore down; the firing must be swallowed.
    if registry.accepts(token) {
        if let timers::TimerKind::Reveal(index) = token.kind {
            animator.mark_revealed(index);
        }
    }
    assert!(animator.revealed().is_empty());
}

/// Runs the reveal schedule against real timers: insertions land in
/// index order and the set grows monotonically to completion.
#[tokio::test]
async fn staggered_reveals_fire_in_index_order() {
    let mut animator = reveal::Animator::new(3);
    animator.arm();
    let schedule = animator.intersection_observed().expect("should trigger");

    let order = Arc::new(Mutex::new(Vec::new()));
    let mut handles = Vec::new();
    for (index, delay) in schedule {
        let order = Arc::clone(&order);
        handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            order.lock().unwrap().push(index);
        }));
    }
    for handle in handles {
        handle.await.expect("reveal task panicked");
    }

    let fired = order.lock().unwrap().clone();
    assert_eq!(fired, vec![0, 1, 2]);

    for index in fired {
        animator.mark_revealed(index);
    }
    assert_eq!(animator.revealed().len(), 3);
}

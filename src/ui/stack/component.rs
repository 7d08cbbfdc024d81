// SPDX-License-Identifier: MPL-2.0
//! Stack widget orchestration.
//!
//! `State` owns one widget instance's machines (gesture, reveal, review
//! surface) plus the rotation seeds and the cancelable timer registry.
//! `update` translates messages into machine transitions and turns their
//! effects into tasks (sleep-backed delayed messages, visibility probes);
//! `view` renders the trigger with its fanned card layers; `surface`
//! hands the host the modal layer to stack over the page while the
//! review surface is mounted.

use crate::config::{
    CARD_FADE, CARD_SHIFT, DEFAULT_STACK_HEIGHT, FRAME, HOVER_SPREAD, REVEAL_SETTLE_DELAY,
    SURFACE_FADE,
};
use crate::stack::gesture;
use crate::stack::layout::{card_attributes, CardAttributes, RotationSeeds};
use crate::stack::reveal::{self, RevealSchedule};
use crate::stack::review;
use crate::stack::size::{self, Dimension, ResolvedDimensions, SizeConfig};
use crate::stack::timers::{TimerKind, TimerToken, Timers};
use crate::stack::{activation_label, StackImage};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::stylesheet;
use iced::widget::{container, mouse_area, text, Id, Stack};
use iced::{
    ContentFit, Degrees, Element, Length, Padding, Point, Rectangle, Rotation, Subscription, Task,
    Theme,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::surface;

/// Construction contract of one stack instance.
#[derive(Debug, Clone)]
pub struct Props {
    /// Ordered image sequence; may be empty.
    pub images: Vec<StackImage>,
    /// Subject composing the accessible label and the surface title.
    pub subject: String,
    /// Sizing intent; `None` falls back to 100% × 180 px.
    pub size: Option<SizeConfig>,
    /// Optional style override for the trigger container, the Rust
    /// analog of an opaque class pass-through.
    pub trigger_style: Option<fn(&Theme) -> container::Style>,
}

impl Props {
    #[must_use]
    pub fn new(images: Vec<StackImage>) -> Self {
        Self {
            images,
            subject: crate::config::DEFAULT_SUBJECT.to_string(),
            size: None,
            trigger_style: None,
        }
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn size(mut self, size: SizeConfig) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn trigger_style(mut self, style: fn(&Theme) -> container::Style) -> Self {
        self.trigger_style = Some(style);
        self
    }
}

/// Messages of one stack instance.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved inside the trigger area.
    PointerMoved(Point),
    /// Pointer pressed on the trigger.
    PointerPressed,
    /// Pointer released; resolves the gesture.
    PointerReleased,
    /// Pointer entered the trigger area.
    PointerEntered,
    /// Pointer left the trigger area.
    PointerExited,
    /// Close button or backdrop press on the review surface.
    CloseRequested,
    /// Intercepted cancel key (Escape) routed from the host.
    CancelRequested,
    /// The host's scroll position changed; re-probe visibility.
    HostScrolled,
    /// Result of a visible-bounds probe of the trigger container.
    VisibilityProbed(Option<Rectangle>),
    /// Host-supplied geometry: the stack's bounds and the viewport.
    ViewportChanged {
        stack: Rectangle,
        viewport: Rectangle,
    },
    /// A scheduled delay elapsed.
    TimerFired(TimerToken),
    /// Animation frame while a fade is in flight.
    AnimationTick,
}

/// State of one stack widget instance. Created on mount, discarded on
/// unmount; never shared between instances.
pub struct State {
    props: Props,
    resolved: ResolvedDimensions,
    id: String,
    current_index: usize,
    seeds: RotationSeeds,
    gesture: gesture::Navigator,
    reveal: reveal::Animator,
    review: review::Controller,
    timers: Timers,
    cursor_x: Option<f32>,
    hovered: bool,
    /// When each card's entrance was released, for the fade progress.
    revealed_at: BTreeMap<usize, Instant>,
    /// Fade progress of the review surface, 0.0–1.0.
    surface_fade: f32,
    last_tick: Option<Instant>,
    /// Times keyboard focus returned to the trigger, for close-cycle
    /// accounting.
    focus_returns: u64,
    torn_down: bool,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("count", &self.props.images.len())
            .field("current_index", &self.current_index)
            .field("review", &self.review.phase())
            .finish()
    }
}

fn next_instance_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    format!("img-stack-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Delayed message carrying a cancelable token.
fn delayed(duration: Duration, token: TimerToken) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(duration).await },
        move |_| Message::TimerFired(token),
    )
}

impl State {
    /// Mounts a new instance: installs the stylesheet, fixes the rotation
    /// seeds for this instance's lifetime, and schedules the reveal
    /// arming delay.
    pub fn new(props: Props) -> (Self, Task<Message>) {
        stylesheet::install();

        let resolved = size::resolve(props.size.as_ref());
        let count = props.images.len();

        let state = Self {
            resolved,
            id: next_instance_id(),
            current_index: 0,
            seeds: RotationSeeds::generate(),
            gesture: gesture::Navigator::default(),
            reveal: reveal::Animator::new(count),
            review: review::Controller::default(),
            timers: Timers::default(),
            cursor_x: None,
            hovered: false,
            revealed_at: BTreeMap::new(),
            surface_fade: 0.0,
            last_tick: None,
            focus_returns: 0,
            torn_down: false,
            props,
        };

        let settle = state.timers.issue(TimerKind::Settle);
        (state, delayed(REVEAL_SETTLE_DELAY, settle))
    }

    /// Unmounts the instance: every pending delay becomes stale and no
    /// callback may mutate state afterwards.
    pub fn teardown(&mut self) {
        self.timers.invalidate_all();
        self.torn_down = true;
    }

    /// Accessible label of the activation control.
    #[must_use]
    pub fn label(&self) -> String {
        activation_label(self.props.images.len(), &self.props.subject)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn review_phase(&self) -> review::Phase {
        self.review.phase()
    }

    #[must_use]
    pub fn focus(&self) -> review::FocusTarget {
        self.review.focus()
    }

    /// How many close cycles have handed focus back to the trigger.
    #[must_use]
    pub fn focus_returns(&self) -> u64 {
        self.focus_returns
    }

    #[must_use]
    pub fn revealed(&self) -> &std::collections::BTreeSet<usize> {
        self.reveal.revealed()
    }

    #[must_use]
    pub fn surface_fade(&self) -> f32 {
        self.surface_fade
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Callbacks that outlive the instance are swallowed.
        if self.torn_down {
            return Task::none();
        }

        match message {
            Message::PointerMoved(position) => {
                self.cursor_x = Some(position.x);
                self.gesture.drag_move(position.x);
                Task::none()
            }
            Message::PointerEntered => {
                self.hovered = true;
                Task::none()
            }
            Message::PointerExited => {
                self.hovered = false;
                Task::none()
            }
            Message::PointerPressed => {
                if let Some(x) = self.cursor_x {
                    self.gesture.drag_start(x);
                }
                Task::none()
            }
            Message::PointerReleased => {
                let count = self.props.images.len();
                match self.gesture.drag_end(self.current_index, count) {
                    gesture::Outcome::Navigated(index) => {
                        self.current_index = index;
                        Task::none()
                    }
                    gesture::Outcome::Tap => self.apply(review::Message::OpenRequested),
                    gesture::Outcome::Ignored | gesture::Outcome::AtBoundary => Task::none(),
                }
            }
            Message::CloseRequested | Message::CancelRequested => {
                self.apply(review::Message::CloseRequested)
            }
            Message::HostScrolled => {
                if self.reveal.phase() == reveal::Phase::Armed {
                    self.probe_visibility()
                } else {
                    Task::none()
                }
            }
            Message::VisibilityProbed(bounds) => {
                let intersecting =
                    bounds.is_some_and(|rect| rect.width > 0.0 && rect.height > 0.0);
                if intersecting {
                    let schedule = self.reveal.intersection_observed();
                    self.schedule_reveals(schedule)
                } else {
                    Task::none()
                }
            }
            Message::ViewportChanged { stack, viewport } => {
                let schedule = self.reveal.observe(stack, viewport);
                self.schedule_reveals(schedule)
            }
            Message::TimerFired(token) => {
                if !self.timers.accepts(token) {
                    return Task::none();
                }
                match token.kind {
                    TimerKind::Settle => {
                        if self.reveal.arm() {
                            self.probe_visibility()
                        } else {
                            Task::none()
                        }
                    }
                    TimerKind::Reveal(index) => {
                        if self.reveal.mark_revealed(index) {
                            self.revealed_at.insert(index, Instant::now());
                        }
                        Task::none()
                    }
                    TimerKind::FrameCommit => self.apply(review::Message::FrameCommitted),
                    TimerKind::SurfaceFallback => {
                        self.apply(review::Message::TransitionFinished)
                    }
                }
            }
            Message::AnimationTick => {
                if self.advance_fade() {
                    // The fade reaching zero is the transition-completion
                    // signal; the fallback timer covers stalled ticks.
                    self.apply(review::Message::TransitionFinished)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Feeds the review controller and carries out its effect.
    fn apply(&mut self, message: review::Message) -> Task<Message> {
        match self.review.handle(message) {
            review::Effect::None => Task::none(),
            review::Effect::Mount => {
                self.surface_fade = 0.0;
                self.last_tick = None;
                let commit = self.timers.issue(TimerKind::FrameCommit);
                delayed(FRAME, commit)
            }
            review::Effect::BeginOpening => {
                self.last_tick = None;
                Task::none()
            }
            review::Effect::BeginClosing => {
                self.last_tick = None;
                let fallback = self.timers.issue(TimerKind::SurfaceFallback);
                delayed(SURFACE_FADE, fallback)
            }
            review::Effect::Finish => {
                self.surface_fade = 0.0;
                self.focus_returns += 1;
                Task::none()
            }
        }
    }

    fn schedule_reveals(&self, schedule: Option<RevealSchedule>) -> Task<Message> {
        let Some(schedule) = schedule else {
            return Task::none();
        };

        Task::batch(schedule.into_iter().map(|(index, delay)| {
            let token = self.timers.issue(TimerKind::Reveal(index));
            delayed(delay, token)
        }))
    }

    fn probe_visibility(&self) -> Task<Message> {
        container::visible_bounds(Id::new(self.id.clone())).map(Message::VisibilityProbed)
    }

    /// Steps the surface fade toward its target. Returns true when the
    /// closing fade just reached zero, i.e. the transition completed.
    fn advance_fade(&mut self) -> bool {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map_or(FRAME, |tick| now.duration_since(tick))
            .min(Duration::from_millis(100));
        self.last_tick = Some(now);

        let target = self.review.fade_target();
        if (self.surface_fade - target).abs() <= f32::EPSILON {
            return false;
        }

        let step = dt.as_secs_f32() / SURFACE_FADE.as_secs_f32();
        if self.surface_fade < target {
            self.surface_fade = (self.surface_fade + step).min(target);
        } else {
            self.surface_fade = (self.surface_fade - step).max(target);
        }

        self.review.phase() == review::Phase::Closing && self.surface_fade <= 0.0
    }

    /// Whether any fade is in flight and ticks are needed.
    fn animating(&self) -> bool {
        let surface_settling = (self.surface_fade - self.review.fade_target()).abs() > f32::EPSILON;
        let cards_settling = self
            .revealed_at
            .values()
            .any(|started| started.elapsed() < CARD_FADE);
        surface_settling || cards_settling
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.animating() {
            iced::time::every(FRAME).map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    fn entrance_progress(&self, index: usize) -> f32 {
        match self.revealed_at.get(&index) {
            Some(started) => {
                (started.elapsed().as_secs_f32() / CARD_FADE.as_secs_f32()).min(1.0)
            }
            None if self.reveal.revealed().contains(&index) => 1.0,
            None => 0.0,
        }
    }

    fn stack_height(&self) -> Length {
        match self.resolved.height {
            Dimension::Css(length) => length.to_length(),
            Dimension::Auto => match (self.resolved.width, self.props.size.as_ref()) {
                (size::CssLength::Px(width), Some(config)) => {
                    Length::Fixed(width / config.ratio_value())
                }
                _ => Length::Fixed(DEFAULT_STACK_HEIGHT),
            },
        }
    }

    /// Renders the trigger with its fanned card layers.
    pub fn view(&self) -> Element<'_, Message> {
        let count = self.props.images.len();
        let label = self.label();
        let cards = card_attributes(
            count,
            self.current_index,
            self.reveal.revealed(),
            Some(&self.seeds),
        );

        // Later pushes paint on top; card 0 carries the highest z-index,
        // so push in reverse. Cards outside the visible window stay in
        // the sequence but are not painted.
        let mut layers = Stack::new();
        if count == 0 {
            // An empty stack still presents its count-aware label.
            layers = layers.push(
                container(text(label.clone()).size(stylesheet::install().caption_size))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center)
                    .align_y(iced::alignment::Vertical::Center),
            );
        }
        for card in cards.iter().rev().filter(|card| card.visible) {
            layers = layers.push(self.card_layer(card, &label));
        }

        let trigger = mouse_area(layers)
            .on_press(Message::PointerPressed)
            .on_release(Message::PointerReleased)
            .on_move(Message::PointerMoved)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerExited)
            .interaction(iced::mouse::Interaction::Pointer);

        let mut host = container(trigger)
            .id(Id::new(self.id.clone()))
            .width(self.resolved.width.to_length())
            .height(self.stack_height());

        if let Some(style) = self.props.trigger_style {
            host = host.style(style);
        }

        host.into()
    }

    fn card_layer(&self, card: &CardAttributes, label: &str) -> Element<'_, Message> {
        let sheet = stylesheet::install();
        let image = &self.props.images[card.index];
        let entrance = self.entrance_progress(card.index);

        let spread = if self.hovered { HOVER_SPREAD } else { 0.0 };
        let shift = card.translate_x + card.translate_x.signum() * spread;
        // Offsets are expressed as non-negative padding from a common
        // inset, and unrevealed cards rest slightly lower so the
        // entrance slides them up as they fade in.
        let inset = CARD_SHIFT + HOVER_SPREAD;
        let slide = (1.0 - entrance) * 12.0;

        let photo = iced::widget::image(image.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(entrance)
            .rotation(Rotation::Floating(Degrees(card.rotation_degrees).into()));

        let mut face = Stack::new().push(photo);
        if card.caption_visible {
            let bar = container(text(label.to_string()).size(sheet.caption_size))
                .style(styles::container::caption)
                .padding([spacing::XXS, spacing::XS]);
            face = face.push(
                container(bar)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .align_x(iced::alignment::Horizontal::Center),
            );
        }

        container(face)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: card.top_offset + slide,
                right: inset - shift,
                bottom: 0.0,
                left: inset + shift,
            })
            .into()
    }

    /// The modal review-surface layer, while mounted. The host stacks it
    /// over the whole page so the surface covers the window, not just
    /// the trigger's bounds.
    pub fn surface(&self) -> Option<Element<'_, Message>> {
        if !self.review.is_mounted() {
            return None;
        }

        Some(surface::view(surface::ViewModel {
            subject: &self.props.subject,
            images: &self.props.images,
            aspect_ratio: self.props.size.as_ref().map(SizeConfig::ratio_value),
            fade: self.surface_fade,
        }))
    }
}

//! Per-frame grab, drag and deposit state machine
//!
//! The engine is driven once per video frame with every hand the detector
//! reported. Each hand is applied in order, so a later hand observes the
//! grab state left behind by an earlier one within the same call.

use super::config::{EngineConfig, FireDepositPolicy};
use super::event::GameEvent;
use crate::board::{Layout, Point};
use crate::elements::{Element, PerElement, Rgb, GOLD};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// One detected hand reduced to a fingertip and a pinch flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPose {
    pub position: Point,
    pub closed: bool,
}

impl HandPose {
    pub fn new(position: Point, closed: bool) -> Self {
        Self { position, closed }
    }

    pub fn open(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), false)
    }

    pub fn pinched(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), true)
    }
}

/// Whether an element is currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GrabState {
    #[default]
    Idle,
    Grabbing(Element),
}

/// Result of one update call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutcome {
    pub tokens: PerElement<Point>,
    /// Events fired during this call, in emission order
    pub events: Vec<GameEvent>,
    pub gold_achieved: bool,
    pub target_color: Rgb,
    pub grabbed: Option<Element>,
}

pub struct InteractionEngine {
    config: EngineConfig,
    layout: Layout,
    colors: PerElement<Rgb>,
    tokens: PerElement<Point>,
    grab: GrabState,
    finger_in_box: PerElement<bool>,
    last_touch: PerElement<Option<Duration>>,
    completed: bool,
    target_color: Rgb,
    tinting: bool,
    tint: Option<Rgb>,
    ambience: bool,
}

impl InteractionEngine {
    pub fn new(layout: Layout, config: EngineConfig) -> Self {
        Self {
            tokens: layout.home_centers(),
            colors: PerElement::from_fn(Element::default_color),
            grab: GrabState::Idle,
            finger_in_box: PerElement::default(),
            last_touch: PerElement::default(),
            completed: false,
            target_color: GOLD,
            tinting: config.tinting,
            tint: None,
            ambience: false,
            config,
            layout,
        }
    }

    /// Use custom element colors for the target and tint
    pub fn with_colors(mut self, colors: PerElement<Rgb>) -> Self {
        self.colors = colors;
        self
    }

    /// Apply every hand detected in one frame.
    ///
    /// `now` is a monotonic timestamp from an origin of the caller's choosing;
    /// it only feeds the per-element touch cooldown.
    pub fn update(&mut self, hands: &[HandPose], now: Duration) -> FrameOutcome {
        let mut events = Vec::new();

        for hand in hands {
            match self.grab {
                GrabState::Grabbing(element) => self.drag_or_release(element, hand, &mut events),
                GrabState::Idle => self.scan_homes(hand, now, &mut events),
            }
        }

        self.outcome(events)
    }

    fn drag_or_release(&mut self, element: Element, hand: &HandPose, events: &mut Vec<GameEvent>) {
        if hand.closed {
            self.tokens[element] = hand.position;
            return;
        }

        if self.layout.target().contains(hand.position) {
            self.deposit(element, events);
        } else {
            debug!("{} released outside the target at {:?}", element, hand.position);
        }
        self.grab = GrabState::Idle;
    }

    fn deposit(&mut self, element: Element, events: &mut Vec<GameEvent>) {
        let color = self.colors[element];
        self.target_color = color;
        self.tint = Some(color);

        if element == Element::Fire {
            let audible = match self.config.fire_deposit {
                FireDepositPolicy::Always => true,
                FireDepositPolicy::WhenTinting => self.tinting,
            };
            if audible {
                events.push(GameEvent::Deposited(Element::Fire));
                self.ambience = true;
            }
        } else {
            events.push(GameEvent::Deposited(element));
            if self.ambience {
                events.push(GameEvent::StopAmbience);
                self.ambience = false;
            }
        }

        let in_target = self.tokens_in_target();
        info!("Deposited {} ({}/4 in target)", element, in_target);

        if in_target == Element::ALL.len() {
            self.completed = true;
            self.target_color = GOLD;
            // The completion cue replaces the Fire loop.
            self.ambience = false;
            events.push(GameEvent::Completed);
            info!("All four elements in the target");
        }
    }

    fn scan_homes(&mut self, hand: &HandPose, now: Duration, events: &mut Vec<GameEvent>) {
        let cooldown = self.config.touch_cooldown();

        for element in Element::ALL {
            if !self.layout.home(element).contains(hand.position) {
                self.finger_in_box[element] = false;
                continue;
            }

            if !self.finger_in_box[element] {
                self.finger_in_box[element] = true;
                let ready = self.last_touch[element]
                    .is_none_or(|last| now.saturating_sub(last) > cooldown);
                if ready {
                    debug!("Touch detected in {} square", element);
                    events.push(GameEvent::Touched(element));
                    self.last_touch[element] = Some(now);
                }
            }

            if hand.closed && self.grab == GrabState::Idle {
                debug!("Grabbed {}", element);
                self.grab = GrabState::Grabbing(element);
            }
        }
    }

    fn tokens_in_target(&self) -> usize {
        let target = self.layout.target();
        self.tokens.values().filter(|p| target.contains(**p)).count()
    }

    fn outcome(&self, events: Vec<GameEvent>) -> FrameOutcome {
        FrameOutcome {
            tokens: self.tokens,
            events,
            gold_achieved: self.completed,
            target_color: self.target_color,
            grabbed: self.grabbed(),
        }
    }

    /// Return every token home and clear grab, completion and tint
    pub fn reset(&mut self) {
        self.tokens = self.layout.home_centers();
        self.grab = GrabState::Idle;
        self.completed = false;
        self.target_color = GOLD;
        self.tint = None;
        self.ambience = false;
        if self.config.reset_clears_cooldowns {
            self.last_touch.fill(None);
        }
        info!("Game reset");
    }

    /// Current state without advancing the machine
    pub fn snapshot(&self) -> FrameOutcome {
        self.outcome(Vec::new())
    }

    pub fn grab_state(&self) -> GrabState {
        self.grab
    }

    pub fn grabbed(&self) -> Option<Element> {
        match self.grab {
            GrabState::Grabbing(element) => Some(element),
            GrabState::Idle => None,
        }
    }

    pub fn token(&self, element: Element) -> Point {
        self.tokens[element]
    }

    pub fn tokens(&self) -> &PerElement<Point> {
        &self.tokens
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn target_color(&self) -> Rgb {
        self.target_color
    }

    /// Background tint for the segmentation overlay, if tinting is engaged
    pub fn tint_color(&self) -> Option<Rgb> {
        if self.tinting { self.tint } else { None }
    }

    pub fn tinting(&self) -> bool {
        self.tinting
    }

    pub fn set_tinting(&mut self, enabled: bool) {
        self.tinting = enabled;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine() -> InteractionEngine {
        InteractionEngine::new(Layout::new(640, 480).unwrap(), EngineConfig::default())
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    /// Grab `element` from its home and drop it at `drop` over three frames.
    fn carry(engine: &mut InteractionEngine, element: Element, drop: Point, t: f64) -> FrameOutcome {
        let home = engine.layout().home(element).center();
        engine.update(&[HandPose::pinched(home.x, home.y)], secs(t));
        engine.update(&[HandPose::new(drop, true)], secs(t + 0.1));
        engine.update(&[HandPose::new(drop, false)], secs(t + 0.2))
    }

    #[test]
    fn test_water_scenario() {
        let mut engine = engine();

        let out = engine.update(&[HandPose::open(60, 400)], secs(10.0));
        assert_eq!(out.events, vec![GameEvent::Touched(Element::Water)]);
        assert_eq!(out.grabbed, None);

        let out = engine.update(&[HandPose::pinched(60, 400)], secs(10.1));
        assert!(out.events.is_empty());
        assert_eq!(out.grabbed, Some(Element::Water));

        let out = engine.update(&[HandPose::pinched(300, 400)], secs(10.2));
        assert_eq!(out.tokens[Element::Water], Point::new(300, 400));

        let out = engine.update(&[HandPose::open(300, 400)], secs(10.3));
        assert_eq!(out.events, vec![GameEvent::Deposited(Element::Water)]);
        assert_eq!(out.target_color, (0, 0, 255));
        assert_eq!(out.grabbed, None);
        assert!(!out.gold_achieved);
        assert_eq!(engine.tint_color(), Some((0, 0, 255)));
    }

    #[test]
    fn test_touch_and_grab_on_same_frame() {
        let mut engine = engine();
        let out = engine.update(&[HandPose::pinched(580, 60)], secs(1.0));
        assert_eq!(out.events, vec![GameEvent::Touched(Element::Air)]);
        assert_eq!(engine.grab_state(), GrabState::Grabbing(Element::Air));
    }

    #[test]
    fn test_edge_point_is_ignored() {
        let mut engine = engine();
        let out = engine.update(&[HandPose::pinched(0, 420)], secs(1.0));
        assert!(out.events.is_empty());
        assert_eq!(out.grabbed, None);

        // Release exactly on the target's left edge is not a deposit.
        engine.update(&[HandPose::pinched(60, 420)], secs(2.0));
        let out = engine.update(&[HandPose::open(260, 420)], secs(2.1));
        assert!(out.events.is_empty());
        assert_eq!(out.target_color, GOLD);
    }

    #[test]
    fn test_release_outside_target() {
        let mut engine = engine();
        engine.update(&[HandPose::pinched(60, 60)], secs(1.0));
        engine.update(&[HandPose::pinched(320, 200)], secs(1.1));
        let out = engine.update(&[HandPose::open(320, 200)], secs(1.2));

        assert!(out.events.is_empty());
        assert_eq!(out.grabbed, None);
        assert_eq!(out.target_color, GOLD);
        assert!(!out.gold_achieved);
        assert_eq!(out.tokens[Element::Fire], Point::new(320, 200));
    }

    #[test]
    fn test_release_does_not_move_token() {
        let mut engine = engine();
        engine.update(&[HandPose::pinched(60, 60)], secs(1.0));
        engine.update(&[HandPose::pinched(320, 200)], secs(1.1));
        engine.update(&[HandPose::open(300, 400)], secs(1.2));
        assert_eq!(engine.token(Element::Fire), Point::new(320, 200));
    }

    #[test]
    fn test_completion_on_last_deposit() {
        let mut engine = engine();
        carry(&mut engine, Element::Fire, Point::new(280, 380), 0.0);
        carry(&mut engine, Element::Air, Point::new(300, 400), 5.0);
        carry(&mut engine, Element::Water, Point::new(320, 420), 10.0);
        assert!(!engine.is_complete());
        assert_eq!(engine.target_color(), (0, 0, 255));

        let out = carry(&mut engine, Element::Earth, Point::new(340, 440), 15.0);
        assert_eq!(
            out.events,
            vec![GameEvent::Deposited(Element::Earth), GameEvent::Completed]
        );
        assert!(out.gold_achieved);
        assert_eq!(out.target_color, GOLD);
        assert_eq!(engine.tint_color(), Some((0, 128, 128)));
    }

    #[test]
    fn test_completion_is_sticky_until_reset() {
        let mut engine = engine();
        for (i, element) in Element::ALL.into_iter().enumerate() {
            carry(&mut engine, element, Point::new(300, 400), i as f64 * 5.0);
        }
        assert!(engine.is_complete());

        // Dragging one out again does not clear completion.
        carry(&mut engine, Element::Fire, Point::new(100, 200), 30.0);
        assert!(engine.is_complete());

        engine.reset();
        assert!(!engine.is_complete());
    }

    #[test]
    fn test_touch_cooldown() {
        let mut engine = engine();
        let enter = HandPose::open(60, 60);
        let leave = HandPose::open(320, 240);

        assert_eq!(engine.update(&[enter], secs(1.0)).events.len(), 1);
        engine.update(&[leave], secs(1.2));
        assert!(engine.update(&[enter], secs(1.5)).events.is_empty());
        engine.update(&[leave], secs(1.7));
        // Cooldown is measured from the last emitted touch, not the last entry.
        assert_eq!(
            engine.update(&[enter], secs(2.1)).events,
            vec![GameEvent::Touched(Element::Fire)]
        );
    }

    #[test]
    fn test_staying_in_box_is_not_a_new_touch() {
        let mut engine = engine();
        engine.update(&[HandPose::open(60, 60)], secs(1.0));
        assert!(engine.update(&[HandPose::open(61, 61)], secs(5.0)).events.is_empty());
    }

    #[test]
    fn test_cooldowns_are_independent_per_element() {
        let mut engine = engine();
        engine.update(&[HandPose::open(60, 60)], secs(1.0));
        let out = engine.update(&[HandPose::open(580, 60)], secs(1.1));
        assert_eq!(out.events, vec![GameEvent::Touched(Element::Air)]);
    }

    #[test]
    fn test_fire_deposit_when_tinting() {
        let mut engine = engine();
        let out = carry(&mut engine, Element::Fire, Point::new(300, 400), 0.0);
        assert_eq!(out.events, vec![GameEvent::Deposited(Element::Fire)]);

        engine.reset();
        engine.set_tinting(false);
        let out = carry(&mut engine, Element::Fire, Point::new(300, 400), 5.0);
        assert!(out.events.is_empty());
        // Target still takes Fire's color even when the event is muted.
        assert_eq!(out.target_color, (255, 0, 0));
        assert_eq!(engine.tint_color(), None);
    }

    #[test]
    fn test_fire_deposit_always() {
        let layout = Layout::new(640, 480).unwrap();
        let mut engine = InteractionEngine::new(layout, EngineConfig::unconditional_fire());
        engine.set_tinting(false);
        let out = carry(&mut engine, Element::Fire, Point::new(300, 400), 0.0);
        assert_eq!(out.events, vec![GameEvent::Deposited(Element::Fire)]);
    }

    #[test]
    fn test_non_fire_deposit_stops_ambience() {
        let mut engine = engine();
        carry(&mut engine, Element::Fire, Point::new(300, 400), 0.0);
        let out = carry(&mut engine, Element::Air, Point::new(320, 400), 5.0);
        assert_eq!(
            out.events,
            vec![GameEvent::Deposited(Element::Air), GameEvent::StopAmbience]
        );

        let out = carry(&mut engine, Element::Water, Point::new(340, 400), 10.0);
        assert_eq!(out.events, vec![GameEvent::Deposited(Element::Water)]);
    }

    #[test]
    fn test_completion_ends_ambience() {
        let mut engine = engine();
        carry(&mut engine, Element::Air, Point::new(300, 400), 0.0);
        carry(&mut engine, Element::Water, Point::new(310, 400), 5.0);
        carry(&mut engine, Element::Earth, Point::new(320, 400), 10.0);
        let out = carry(&mut engine, Element::Fire, Point::new(330, 400), 15.0);
        assert_eq!(
            out.events,
            vec![GameEvent::Deposited(Element::Fire), GameEvent::Completed]
        );

        // Re-depositing Air after completion has no loop left to stop.
        let out = carry(&mut engine, Element::Air, Point::new(340, 400), 20.0);
        assert_eq!(
            out.events,
            vec![GameEvent::Deposited(Element::Air), GameEvent::Completed]
        );
    }

    #[test]
    fn test_second_hand_cannot_steal_grab() {
        let mut engine = engine();
        let out = engine.update(
            &[HandPose::pinched(60, 60), HandPose::pinched(580, 60)],
            secs(1.0),
        );
        // The second hand is applied while Fire is held, so it drags Fire.
        assert_eq!(out.grabbed, Some(Element::Fire));
        assert_eq!(out.tokens[Element::Fire], Point::new(580, 60));
        assert_eq!(out.tokens[Element::Air], Point::new(580, 60));
        assert_eq!(out.events, vec![GameEvent::Touched(Element::Fire)]);
    }

    #[test]
    fn test_later_hand_overrides_earlier_release() {
        let mut engine = engine();
        engine.update(&[HandPose::pinched(60, 60)], secs(1.0));
        let out = engine.update(
            &[HandPose::open(320, 240), HandPose::pinched(580, 60)],
            secs(1.1),
        );
        // First hand releases Fire, second hand grabs Air.
        assert_eq!(out.grabbed, Some(Element::Air));
        assert_eq!(out.events, vec![GameEvent::Touched(Element::Air)]);
    }

    #[test]
    fn test_no_hands_changes_nothing() {
        let mut engine = engine();
        engine.update(&[HandPose::pinched(60, 60)], secs(1.0));
        let before = engine.snapshot();
        let out = engine.update(&[], secs(2.0));
        assert_eq!(out, before);
    }

    #[test]
    fn test_reset_keeps_cooldowns_by_default() {
        let mut engine = engine();
        engine.update(&[HandPose::open(60, 60)], secs(1.0));
        engine.update(&[HandPose::open(320, 240)], secs(1.1));
        engine.reset();
        assert!(engine.update(&[HandPose::open(60, 60)], secs(1.2)).events.is_empty());
    }

    #[test]
    fn test_reset_can_clear_cooldowns() {
        let layout = Layout::new(640, 480).unwrap();
        let config = EngineConfig {
            reset_clears_cooldowns: true,
            ..Default::default()
        };
        let mut engine = InteractionEngine::new(layout, config);
        engine.update(&[HandPose::open(60, 60)], secs(1.0));
        engine.update(&[HandPose::open(320, 240)], secs(1.1));
        engine.reset();
        assert_eq!(engine.update(&[HandPose::open(60, 60)], secs(1.2)).events.len(), 1);
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut engine = engine();
        let out = engine.update(&[HandPose::open(60, 400)], secs(1.0));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["goldAchieved"], false);
        assert_eq!(json["events"][0], "touch:water");
        assert_eq!(json["tokens"]["water"]["x"], 60);
        assert_eq!(json["targetColor"], serde_json::json!([255, 255, 0]));
        assert!(json["grabbed"].is_null());
    }

    fn arb_hand() -> impl Strategy<Value = HandPose> {
        (-50i32..700, -50i32..530, any::<bool>())
            .prop_map(|(x, y, closed)| HandPose::new(Point::new(x, y), closed))
    }

    proptest! {
        #[test]
        fn prop_closed_hand_drags_grabbed_token(path in prop::collection::vec((-50i32..700, -50i32..530), 1..30)) {
            let mut engine = engine();
            engine.update(&[HandPose::pinched(60, 420)], secs(0.0));
            for (i, (x, y)) in path.into_iter().enumerate() {
                let out = engine.update(&[HandPose::pinched(x, y)], secs(0.1 * (i + 1) as f64));
                prop_assert_eq!(out.grabbed, Some(Element::Water));
                prop_assert_eq!(out.tokens[Element::Water], Point::new(x, y));
            }
        }

        #[test]
        fn prop_reset_restores_initial_state(frames in prop::collection::vec(prop::collection::vec(arb_hand(), 0..3), 0..40)) {
            let mut engine = engine();
            for (i, hands) in frames.iter().enumerate() {
                engine.update(hands, secs(0.05 * i as f64));
            }
            engine.reset();
            prop_assert!(!engine.is_complete());
            prop_assert_eq!(engine.grabbed(), None);
            prop_assert_eq!(engine.target_color(), GOLD);
            prop_assert_eq!(*engine.tokens(), engine.layout().home_centers());
        }

        #[test]
        fn prop_only_grabbed_token_moves(frames in prop::collection::vec(arb_hand(), 1..60)) {
            let mut engine = engine();
            for (i, hand) in frames.into_iter().enumerate() {
                let before = *engine.tokens();
                let held = engine.grabbed();
                let out = engine.update(&[hand], secs(0.05 * i as f64));
                for element in Element::ALL {
                    if Some(element) != held {
                        prop_assert_eq!(out.tokens[element], before[element]);
                    }
                }
            }
        }
    }
}

//! Fixed timestep simulation tick
//!
//! One call advances the Playing session by exactly one frame and draws it.
//! Drawing is interleaved with the update so each entity is shown in the
//! state it had at that point of the frame.

use glam::Vec2;

use super::hit::Hit;
use super::state::GameSession;
use crate::assets::AssetKey;
use crate::canvas::{Anchor, Canvas};
use crate::settings::Settings;

/// HUD copy and placement
pub const SCORE_POS: Vec2 = Vec2::new(0.0, 10.0);
pub const HELP_POS: Vec2 = Vec2::new(0.0, 40.0);
pub const HUD_TEXT_SIZE: f32 = 30.0;
pub const HELP_TEXT: &str = "ESC - меню";

/// Input gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Mouse-down positions, in arrival order
    pub clicks: Vec<Vec2>,
}

impl TickInput {
    pub fn click(p: Vec2) -> Self {
        Self { clicks: vec![p] }
    }
}

/// Advance the session by one frame, drawing onto `canvas`.
///
/// Returns the click committed this frame, if any. Only the first mouse-down
/// that hits something counts; misses before it are ignored and later
/// mouse-downs are dropped.
pub fn tick(
    state: &mut GameSession,
    input: &TickInput,
    settings: &Settings,
    canvas: &mut impl Canvas,
) -> Option<Hit> {
    state.time_ticks += 1;

    let committed = input
        .clicks
        .iter()
        .find_map(|&p| state.register_click(p));

    // Balls
    let arena = state.arena;
    for slot in &mut state.slots {
        slot.ball.advance();
        slot.ball.reflect_within(&arena);
        if settings.show_hitboxes {
            canvas.hitbox_circle(slot.ball.pos, slot.ball.radius);
        }
        canvas.sprite(AssetKey::BallFace, slot.ball.pos, slot.ball.radius);
    }

    // Destroyed markers: draw, then age
    state.destroyed = std::mem::take(&mut state.destroyed)
        .into_iter()
        .filter_map(|mut m| {
            canvas.sprite(m.kind.asset(), m.pos, m.radius);
            m.tick().then_some(m)
        })
        .collect();

    // Targeters
    for i in 0..state.slots.len() {
        let slot = &mut state.slots[i];
        slot.targeter.advance();
        let center = slot.targeter.visual_center(&slot.ball);
        if settings.show_hitboxes {
            canvas.hitbox_rect(slot.targeter.hitbox(&slot.ball));
        }
        canvas.sprite(slot.targeter.variant.asset(), center, slot.ball.radius);

        if slot.targeter.is_depleted(&slot.ball) {
            state.destroy_slot(i);
        }
    }

    // Clicked markers: draw, then age
    state.clicked = std::mem::take(&mut state.clicked)
        .into_iter()
        .filter_map(|mut m| {
            canvas.sprite(m.kind.asset(), m.pos, m.radius);
            m.tick().then_some(m)
        })
        .collect();

    draw_hud(state.score, canvas);

    committed
}

/// Draw the session as it stands, without advancing it
pub fn draw_session(state: &GameSession, settings: &Settings, canvas: &mut impl Canvas) {
    for slot in &state.slots {
        if settings.show_hitboxes {
            canvas.hitbox_circle(slot.ball.pos, slot.ball.radius);
        }
        canvas.sprite(AssetKey::BallFace, slot.ball.pos, slot.ball.radius);
    }
    for m in &state.destroyed {
        canvas.sprite(m.kind.asset(), m.pos, m.radius);
    }
    for slot in &state.slots {
        if settings.show_hitboxes {
            canvas.hitbox_rect(slot.targeter.hitbox(&slot.ball));
        }
        canvas.sprite(
            slot.targeter.variant.asset(),
            slot.targeter.visual_center(&slot.ball),
            slot.ball.radius,
        );
    }
    for m in &state.clicked {
        canvas.sprite(m.kind.asset(), m.pos, m.radius);
    }
    draw_hud(state.score, canvas);
}

/// Score line and the menu hint
pub fn draw_hud(score: u64, canvas: &mut impl Canvas) {
    canvas.text(
        &format!("Score: {}", score),
        SCORE_POS,
        HUD_TEXT_SIZE,
        Anchor::Left,
    );
    canvas.text(HELP_TEXT, HELP_POS, HUD_TEXT_SIZE, Anchor::Left);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::sim::ball::Ball;
    use crate::sim::hit::HitKind;
    use crate::sim::marker::MarkerKind;
    use crate::sim::state::Slot;
    use crate::sim::targeter::{Targeter, TargeterVariant};

    fn slot(x: f32, y: f32, r: f32, orbit: f32, shrink: f32) -> Slot {
        Slot {
            ball: Ball::new(Vec2::new(x, y), Vec2::ZERO, r),
            targeter: Targeter {
                angle: 0.0,
                angular_speed: 0.0,
                orbit,
                shrink_speed: shrink,
                variant: TargeterVariant::A,
            },
        }
    }

    fn run(state: &mut GameSession, input: &TickInput) -> (Option<Hit>, DrawList) {
        let mut canvas = DrawList::new();
        let hit = tick(state, input, &Settings::default(), &mut canvas);
        (hit, canvas)
    }

    #[test]
    fn test_one_click_per_frame() {
        let mut state = GameSession::with_slots(
            5,
            vec![
                slot(200.0, 200.0, 40.0, 140.0, 0.1),
                slot(800.0, 200.0, 40.0, 140.0, 0.1),
            ],
        );
        let input = TickInput {
            clicks: vec![
                Vec2::new(1000.0, 800.0), // miss, does not use up the frame
                Vec2::new(200.0, 200.0),
                Vec2::new(800.0, 200.0),
            ],
        };
        let (hit, _) = run(&mut state, &input);
        assert_eq!(hit.map(|h| h.slot), Some(0));
        assert_eq!(state.score, 1);
        assert_eq!(state.clicked.len(), 1);
        // Second ball untouched apart from (zero) motion
        assert_eq!(state.slots[1].ball.pos, Vec2::new(800.0, 200.0));
    }

    #[test]
    fn test_targeter_hit_scores_three() {
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 130.0, 0.1)]);
        let (hit, _) = run(&mut state, &TickInput::click(Vec2::new(300.0, 430.0)));
        assert_eq!(hit.map(|h| h.kind), Some(HitKind::Targeter));
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_clicked_marker_drawn_same_frame_and_expires() {
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 130.0, 0.1)]);
        let (_, canvas) = run(&mut state, &TickInput::click(Vec2::new(300.0, 300.0)));
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceClicked), 1);

        // Eleven frames on screen in total, gone from the list after the last
        for _ in 0..9 {
            let (_, canvas) = run(&mut state, &TickInput::default());
            assert_eq!(canvas.count_sprites(AssetKey::BallFaceClicked), 1);
            assert_eq!(state.clicked.len(), 1);
        }
        let (_, canvas) = run(&mut state, &TickInput::default());
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceClicked), 1);
        assert!(state.clicked.is_empty());

        let (_, canvas) = run(&mut state, &TickInput::default());
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceClicked), 0);
    }

    #[test]
    fn test_depleted_targeter_destroys_slot() {
        // Orbit 31 shrinking by 2 drops below radius 30 on the first tick
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 31.0, 2.0)]);
        let (_, canvas) = run(&mut state, &TickInput::default());
        assert_eq!(state.destroyed.len(), 1);
        assert_eq!(state.destroyed[0].kind, MarkerKind::Destroyed);
        assert_eq!(state.destroyed[0].pos, Vec2::new(300.0, 300.0));
        assert_eq!(state.score, 0);
        // The destroyed marker first shows on the following frame
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceDestroyed), 0);
        let (_, canvas) = run(&mut state, &TickInput::default());
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceDestroyed), 1);
    }

    #[test]
    fn test_draw_order_and_hud() {
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 130.0, 0.1)]);
        state.score = 7;
        let (_, canvas) = run(&mut state, &TickInput::default());
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::Sprite { asset: AssetKey::BallFace, .. }
        ));
        assert!(matches!(
            canvas.commands[1],
            DrawCommand::Sprite { asset: AssetKey::TargeterA, .. }
        ));
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, vec!["Score: 7", "ESC - меню"]);
    }

    #[test]
    fn test_hitboxes_drawn_under_sprites_when_enabled() {
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 130.0, 0.1)]);
        let settings = Settings {
            show_hitboxes: true,
        };
        let mut canvas = DrawList::new();
        tick(&mut state, &TickInput::default(), &settings, &mut canvas);
        assert!(matches!(canvas.commands[0], DrawCommand::HitboxCircle { radius, .. } if radius == 30.0));
        assert!(matches!(canvas.commands[1], DrawCommand::Sprite { .. }));
        assert!(matches!(canvas.commands[2], DrawCommand::HitboxRect { .. }));
        assert!(matches!(canvas.commands[3], DrawCommand::Sprite { .. }));
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = GameSession::new(2024);
        let mut last = 0;
        for i in 0..600 {
            let p = Vec2::new((i * 37 % 1200) as f32, (i * 53 % 900) as f32);
            run(&mut state, &TickInput::click(p));
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn test_draw_session_leaves_state_alone() {
        let mut state = GameSession::with_slots(5, vec![slot(300.0, 300.0, 30.0, 130.0, 0.1)]);
        run(&mut state, &TickInput::click(Vec2::new(300.0, 300.0)));
        let before = state.slots.clone();
        let ticks = state.time_ticks;

        let mut canvas = DrawList::new();
        draw_session(&state, &Settings::default(), &mut canvas);
        assert_eq!(canvas.count_sprites(AssetKey::BallFace), 1);
        assert_eq!(canvas.count_sprites(AssetKey::BallFaceClicked), 1);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Score: 1", "ESC - меню"]);
        assert_eq!(state.slots, before);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.clicked.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::new(99999);
        let mut b = GameSession::new(99999);
        for i in 0..200 {
            let input = TickInput::click(Vec2::new((i * 7 % 1200) as f32, 450.0));
            run(&mut a, &input);
            run(&mut b, &input);
        }
        assert_eq!(a.slots, b.slots);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}

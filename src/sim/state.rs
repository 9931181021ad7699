//! Game session state
//!
//! Everything the Playing mode mutates lives here: the ball/targeter slots,
//! the fading markers, the score and the quit-and-save flag.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::ball::Ball;
use super::hit::{Hit, find_hit};
use super::marker::{FadingMarker, MarkerKind};
use super::targeter::Targeter;
use crate::consts::SLOT_COUNT;

/// One ball paired with the targeter hunting it
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub ball: Ball,
    pub targeter: Targeter,
}

impl Slot {
    pub fn random(rng: &mut Pcg32) -> Self {
        let ball = Ball::random(rng);
        let targeter = Targeter::random(rng, &ball);
        Self { ball, targeter }
    }
}

/// Complete session state for one run
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub arena: Arena,
    /// Fixed-size slot array; a slot is replaced, never removed
    pub slots: Vec<Slot>,
    /// Feedback for successful clicks
    pub clicked: Vec<FadingMarker>,
    /// Feedback for balls lost to their targeter
    pub destroyed: Vec<FadingMarker>,
    pub score: u64,
    /// Player chose "quit and save"; the leaderboard prompt runs after the loop
    pub pending_save: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a session with `SLOT_COUNT` fresh slots
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let slots = (0..SLOT_COUNT).map(|_| Slot::random(&mut rng)).collect();
        Self::from_parts(seed, rng, slots)
    }

    /// Create a session with hand-placed slots (replacements stay random)
    pub fn with_slots(seed: u64, slots: Vec<Slot>) -> Self {
        Self::from_parts(seed, Pcg32::seed_from_u64(seed), slots)
    }

    fn from_parts(seed: u64, rng: Pcg32, slots: Vec<Slot>) -> Self {
        log::debug!("Session started with seed {} ({} slots)", seed, slots.len());
        Self {
            seed,
            rng,
            arena: Arena::default(),
            slots,
            clicked: Vec::new(),
            destroyed: Vec::new(),
            score: 0,
            pending_save: false,
            time_ticks: 0,
        }
    }

    /// Swap in a new ball; the slot's targeter keeps orbiting
    pub fn respawn_ball(&mut self, index: usize) {
        let ball = Ball::random(&mut self.rng);
        log::trace!("Slot {} ball respawned at {:?} r={}", index, ball.pos, ball.radius);
        self.slots[index].ball = ball;
    }

    /// Swap in a new ball and a new targeter for it
    pub fn respawn_slot(&mut self, index: usize) {
        self.slots[index] = Slot::random(&mut self.rng);
        log::trace!("Slot {} respawned", index);
    }

    /// Resolve a mouse-down at `p`.
    ///
    /// On a hit the old ball leaves a clicked marker, the score grows by the
    /// hit's points and the ball is replaced.
    pub fn register_click(&mut self, p: Vec2) -> Option<Hit> {
        let hit = find_hit(&self.slots, p)?;
        let old = &self.slots[hit.slot].ball;
        self.clicked.push(FadingMarker::new(MarkerKind::Clicked, old));
        self.score += hit.kind.points();
        log::debug!(
            "Click at {:?} hit slot {} ({:?}), score {}",
            p,
            hit.slot,
            hit.kind,
            self.score
        );
        self.respawn_ball(hit.slot);
        Some(hit)
    }

    /// Retire the slot's ball to its targeter: leave a destroyed marker and
    /// respawn the whole slot
    pub fn destroy_slot(&mut self, index: usize) {
        let old = &self.slots[index].ball;
        self.destroyed
            .push(FadingMarker::new(MarkerKind::Destroyed, old));
        log::trace!("Slot {} ball destroyed at {:?}", index, old.pos);
        self.respawn_slot(index);
    }
}

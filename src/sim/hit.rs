//! Click hit-testing against the slots

use glam::Vec2;

use super::state::Slot;
use crate::consts::{BALL_POINTS, TARGETER_POINTS};

/// Which part of a slot was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Ball,
    Targeter,
}

impl HitKind {
    pub fn points(&self) -> u64 {
        match self {
            HitKind::Ball => BALL_POINTS,
            HitKind::Targeter => TARGETER_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub slot: usize,
    pub kind: HitKind,
}

/// First slot (in index order) hit by `p`. Within a slot the ball is tested
/// before its targeter. Points outside the arena simply miss.
pub fn find_hit(slots: &[Slot], p: Vec2) -> Option<Hit> {
    slots.iter().enumerate().find_map(|(slot, s)| {
        if s.ball.contains_point(p) {
            Some(Hit {
                slot,
                kind: HitKind::Ball,
            })
        } else if s.targeter.contains_point(p, &s.ball) {
            Some(Hit {
                slot,
                kind: HitKind::Targeter,
            })
        } else {
            None
        }
    })
}

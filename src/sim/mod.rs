//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - Drawing only through the `Canvas` contract

pub mod arena;
pub mod ball;
pub mod hit;
pub mod marker;
pub mod state;
pub mod targeter;
pub mod tick;

pub use arena::Arena;
pub use ball::Ball;
pub use hit::{Hit, HitKind, find_hit};
pub use marker::{FadingMarker, MarkerKind};
pub use state::{GameSession, Slot};
pub use targeter::{Targeter, TargeterVariant};
pub use tick::{TickInput, draw_hud, draw_session, tick};

//! Squid Rescue - A click-the-target arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, hit-testing, session)
//! - `modes`: Playing / menu screens state machine
//! - `driver`: Fixed-rate frame clock
//! - `canvas`: Draw contract between the core and the renderer
//! - `assets`: Static asset size table and sprite geometry
//! - `leaderboard`: Name -> score record store
//! - `prompt`: Console question/answer used by quit-and-save
//! - `renderer`: wgpu rendering of a frame's draw list
//! - `platform`: Native window and event loop

pub mod assets;
pub mod canvas;
pub mod driver;
pub mod leaderboard;
pub mod modes;
pub mod platform;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use leaderboard::Leaderboard;
pub use modes::{Flow, Game, Mode};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation and render rate (ticks per second)
    pub const FPS: u32 = 30;

    /// Arena dimensions (logical units, also the window size)
    pub const X_BORDER: f32 = 1200.0;
    pub const Y_BORDER: f32 = 900.0;

    /// Number of ball/targeter slots
    pub const SLOT_COUNT: usize = 5;

    /// Ticks a fading marker stays on screen
    pub const MARKER_LIFETIME: i32 = (FPS / 3) as i32;

    /// Ball spawn ranges (inclusive, whole units)
    pub const BALL_SPAWN_X: (i32, i32) = (100, 1100);
    pub const BALL_SPAWN_Y: (i32, i32) = (100, 900);
    pub const BALL_MAX_SPEED: i32 = 10;
    pub const BALL_MIN_RADIUS: i32 = 20;
    pub const BALL_MAX_RADIUS: i32 = 100;

    /// Targeter orbit starts this far outside the ball (inclusive range)
    pub const TARGETER_ORBIT_GAP: (i32, i32) = (20, 100);

    /// Points awarded per hit
    pub const BALL_POINTS: u64 = 1;
    pub const TARGETER_POINTS: u64 = 3;

    /// Files, relative to the working directory
    pub const LEADERBOARD_PATH: &str = "leaderboard.json";
    pub const FONT_PATH: &str = "resources/font.ttf";
}

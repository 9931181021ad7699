//! Mode state machine
//!
//! `Game` owns everything a running process needs: the session, the settings,
//! the active screen and where the leaderboard lives. The platform layer feeds
//! it one batch of input events per frame and a canvas to draw on.

use glam::Vec2;
use std::mem;
use std::path::PathBuf;

use crate::canvas::{Anchor, Canvas};
use crate::leaderboard::Leaderboard;
use crate::settings::Settings;
use crate::sim::{GameSession, TickInput, draw_session, tick};

pub const TITLE_POS: Vec2 = Vec2::new(600.0, 270.0);
pub const TITLE_SIZE: f32 = 40.0;
pub const ITEM_SIZE: f32 = 29.0;

/// Menu item column: centered on x = 600, 270 wide
pub const MENU_X: (f32, f32) = (465.0, 735.0);
pub const MENU_TOP: f32 = 350.0;
pub const MENU_ROW_HEIGHT: f32 = 40.0;

/// Clickable area of the hitbox toggle on the settings screen
pub const TOGGLE_X: (f32, f32) = (765.0, 835.0);
pub const TOGGLE_Y: (f32, f32) = (350.0, 389.0);

pub const TUTORIAL_LINES: [&str; 6] = [
    "Цель игры:",
    "  Спасите Сон Ки Хунов от нападающих на на них кальмаров!",
    " Нажимайте на них и получайте очки (+1 за Сон Ки Хуна,",
    " +3 за кальмара)",
    "Управление:",
    "  ESC - выйти в меню.",
];

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Platform-neutral input event, positions in logical arena pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseDown(Vec2),
    KeyDown(Key),
    /// Window close request
    Quit,
}

/// Active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Playing,
    Menu,
    Settings,
    /// Rows snapshotted from disk when the screen was opened
    Leaderboard(Vec<(String, u64)>),
    Tutorial,
}

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the loop; run the save prompt afterwards when `save` is set
    Quit { save: bool },
}

/// Entries of the pause menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Continue,
    Settings,
    Leaderboard,
    Tutorial,
    Quit,
    QuitAndSave,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Continue,
        MenuItem::Settings,
        MenuItem::Leaderboard,
        MenuItem::Tutorial,
        MenuItem::Quit,
        MenuItem::QuitAndSave,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Continue => "Продолжить",
            MenuItem::Settings => "Настройки",
            MenuItem::Leaderboard => "Таблица лидеров",
            MenuItem::Tutorial => "Обучение",
            MenuItem::Quit => "Выйти",
            MenuItem::QuitAndSave => "Выйти и сохранить",
        }
    }

    fn row(&self) -> usize {
        match self {
            MenuItem::Continue => 0,
            MenuItem::Settings => 1,
            MenuItem::Leaderboard => 2,
            MenuItem::Tutorial => 3,
            MenuItem::Quit => 4,
            MenuItem::QuitAndSave => 5,
        }
    }

    /// Top edge of the item's band, also where its label is drawn
    pub fn top(&self) -> f32 {
        MENU_TOP + MENU_ROW_HEIGHT * self.row() as f32
    }

    /// Item under a mouse-down, bands are inclusive on whole pixels
    pub fn at(p: Vec2) -> Option<MenuItem> {
        if p.x < MENU_X.0 || p.x > MENU_X.1 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|item| p.y >= item.top() && p.y <= item.top() + MENU_ROW_HEIGHT - 1.0)
    }
}

fn on_hitbox_toggle(p: Vec2) -> bool {
    p.x >= TOGGLE_X.0 && p.x <= TOGGLE_X.1 && p.y >= TOGGLE_Y.0 && p.y <= TOGGLE_Y.1
}

/// Result of feeding one event to the current mode
enum Step {
    Stay,
    Switched,
    Exit(Flow),
}

/// Top-level game: session, settings and the active screen
#[derive(Debug)]
pub struct Game {
    pub session: GameSession,
    pub settings: Settings,
    pub mode: Mode,
    pub leaderboard_path: PathBuf,
}

impl Game {
    pub fn new(seed: u64, leaderboard_path: impl Into<PathBuf>) -> Self {
        Self {
            session: GameSession::new(seed),
            settings: Settings::default(),
            mode: Mode::Playing,
            leaderboard_path: leaderboard_path.into(),
        }
    }

    pub fn with_session(session: GameSession, leaderboard_path: impl Into<PathBuf>) -> Self {
        Self {
            session,
            settings: Settings::default(),
            mode: Mode::Playing,
            leaderboard_path: leaderboard_path.into(),
        }
    }

    /// Run one frame: consume the frame's events in order, then draw the
    /// active mode.
    ///
    /// A window close ends the game without saving unless a quit menu item
    /// was chosen earlier in the batch. An event that changes the mode
    /// discards the rest of the batch apart from a window close. The Playing
    /// simulation only steps in a frame that started and ended in Playing;
    /// on the frame that resumes it the session is drawn as it stands.
    pub fn frame(&mut self, events: &[InputEvent], canvas: &mut impl Canvas) -> Flow {
        let started_playing = self.mode == Mode::Playing;
        let mut clicks = Vec::new();
        let mut switched = false;

        for event in events {
            if *event == InputEvent::Quit {
                log::info!("Window closed, score {}", self.session.score);
                return Flow::Quit { save: false };
            }
            if switched {
                continue;
            }
            match self.handle_event(*event, &mut clicks) {
                Step::Stay => {}
                Step::Switched => switched = true,
                Step::Exit(flow) => {
                    log::info!("Leaving game loop ({:?}), score {}", flow, self.session.score);
                    return flow;
                }
            }
        }

        match &self.mode {
            Mode::Playing => {
                canvas.background();
                if started_playing {
                    tick(&mut self.session, &TickInput { clicks }, &self.settings, canvas);
                } else {
                    draw_session(&self.session, &self.settings, canvas);
                }
            }
            Mode::Menu => {
                canvas.background();
                draw_menu(canvas);
            }
            Mode::Settings => draw_settings(&self.settings, canvas),
            Mode::Leaderboard(rows) => draw_leaderboard(rows, canvas),
            Mode::Tutorial => draw_tutorial(canvas),
        }
        Flow::Continue
    }

    fn handle_event(&mut self, event: InputEvent, clicks: &mut Vec<Vec2>) -> Step {
        let escape = event == InputEvent::KeyDown(Key::Escape);
        match self.mode {
            Mode::Playing => match event {
                _ if escape => {
                    // Clicks that came before the Escape still count
                    if let Some(hit) = clicks.iter().find_map(|&p| self.session.register_click(p)) {
                        log::debug!("Hit on slot {} before pausing", hit.slot);
                    }
                    clicks.clear();
                    self.switch(Mode::Menu)
                }
                InputEvent::MouseDown(p) => {
                    clicks.push(p);
                    Step::Stay
                }
                _ => Step::Stay,
            },
            Mode::Menu => match event {
                _ if escape => self.switch(Mode::Playing),
                InputEvent::MouseDown(p) => match MenuItem::at(p) {
                    Some(item) => self.select(item),
                    None => Step::Stay,
                },
                _ => Step::Stay,
            },
            Mode::Settings => match event {
                _ if escape => self.switch(Mode::Menu),
                InputEvent::MouseDown(p) => {
                    if on_hitbox_toggle(p) {
                        self.settings.toggle_hitboxes();
                    }
                    Step::Stay
                }
                _ => Step::Stay,
            },
            Mode::Leaderboard(_) | Mode::Tutorial if escape => self.switch(Mode::Menu),
            Mode::Leaderboard(_) | Mode::Tutorial => Step::Stay,
        }
    }

    fn select(&mut self, item: MenuItem) -> Step {
        log::debug!("Menu item selected: {:?}", item);
        match item {
            MenuItem::Continue => self.switch(Mode::Playing),
            MenuItem::Settings => self.switch(Mode::Settings),
            MenuItem::Leaderboard => {
                let rows = self.leaderboard_snapshot();
                self.switch(Mode::Leaderboard(rows))
            }
            MenuItem::Tutorial => self.switch(Mode::Tutorial),
            MenuItem::Quit => Step::Exit(Flow::Quit { save: false }),
            MenuItem::QuitAndSave => {
                self.session.pending_save = true;
                Step::Exit(Flow::Quit { save: true })
            }
        }
    }

    fn switch(&mut self, mode: Mode) -> Step {
        let previous = mem::replace(&mut self.mode, mode);
        log::debug!("Mode {:?} -> {:?}", mode_name(&previous), mode_name(&self.mode));
        Step::Switched
    }

    fn leaderboard_snapshot(&self) -> Vec<(String, u64)> {
        match Leaderboard::load(&self.leaderboard_path) {
            Ok(board) => board.standings(),
            Err(e) => {
                log::warn!("Showing empty leaderboard: {}", e);
                Vec::new()
            }
        }
    }
}

fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Playing => "Playing",
        Mode::Menu => "Menu",
        Mode::Settings => "Settings",
        Mode::Leaderboard(_) => "Leaderboard",
        Mode::Tutorial => "Tutorial",
    }
}

fn draw_menu(canvas: &mut impl Canvas) {
    canvas.text("Меню", TITLE_POS, TITLE_SIZE, Anchor::Center);
    for item in MenuItem::ALL {
        canvas.text(
            item.label(),
            Vec2::new(600.0, item.top()),
            ITEM_SIZE,
            Anchor::Center,
        );
    }
}

fn draw_settings(settings: &Settings, canvas: &mut impl Canvas) {
    canvas.text(
        "Рисовать хитбоксы",
        Vec2::new(400.0, 350.0),
        ITEM_SIZE,
        Anchor::Center,
    );
    canvas.text(
        settings.hitboxes_label(),
        Vec2::new(800.0, 350.0),
        ITEM_SIZE,
        Anchor::Center,
    );
}

fn draw_leaderboard(rows: &[(String, u64)], canvas: &mut impl Canvas) {
    canvas.text("Таблица лидеров", TITLE_POS, TITLE_SIZE, Anchor::Center);
    for (i, (name, score)) in rows.iter().enumerate() {
        let n = i + 1;
        let y = 330.0 + 40.0 * n as f32;
        canvas.text(
            &format!("{}. {}", n, name),
            Vec2::new(100.0, y),
            ITEM_SIZE,
            Anchor::Left,
        );
        canvas.text(
            &format!("{} pts.", score),
            Vec2::new(1000.0, y),
            ITEM_SIZE,
            Anchor::Center,
        );
    }
}

fn draw_tutorial(canvas: &mut impl Canvas) {
    canvas.text("Обучение", TITLE_POS, TITLE_SIZE, Anchor::Center);
    for (i, line) in TUTORIAL_LINES.iter().enumerate() {
        canvas.text(
            line,
            Vec2::new(200.0, 330.0 + 40.0 * i as f32),
            ITEM_SIZE,
            Anchor::Left,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKey;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::consts::SLOT_COUNT;
    use crate::sim::{Ball, Slot, Targeter, TargeterVariant};

    fn still_slot(x: f32, y: f32) -> Slot {
        Slot {
            ball: Ball::new(Vec2::new(x, y), Vec2::ZERO, 40.0),
            targeter: Targeter {
                angle: 0.0,
                angular_speed: 0.0,
                orbit: 140.0,
                shrink_speed: 0.1,
                variant: TargeterVariant::A,
            },
        }
    }

    fn game() -> Game {
        Game::new(7, "does-not-exist/leaderboard.json")
    }

    fn run(game: &mut Game, events: &[InputEvent]) -> (Flow, DrawList) {
        let mut canvas = DrawList::new();
        let flow = game.frame(events, &mut canvas);
        (flow, canvas)
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseDown(Vec2::new(x, y))
    }

    const ESC: InputEvent = InputEvent::KeyDown(Key::Escape);

    #[test]
    fn test_menu_bands() {
        assert_eq!(MenuItem::at(Vec2::new(600.0, 350.0)), Some(MenuItem::Continue));
        assert_eq!(MenuItem::at(Vec2::new(465.0, 389.0)), Some(MenuItem::Continue));
        assert_eq!(MenuItem::at(Vec2::new(735.0, 390.0)), Some(MenuItem::Settings));
        assert_eq!(MenuItem::at(Vec2::new(600.0, 469.0)), Some(MenuItem::Leaderboard));
        assert_eq!(MenuItem::at(Vec2::new(600.0, 470.0)), Some(MenuItem::Tutorial));
        assert_eq!(MenuItem::at(Vec2::new(600.0, 549.0)), Some(MenuItem::Quit));
        assert_eq!(MenuItem::at(Vec2::new(600.0, 589.0)), Some(MenuItem::QuitAndSave));
        assert_eq!(MenuItem::at(Vec2::new(600.0, 590.0)), None);
        assert_eq!(MenuItem::at(Vec2::new(600.0, 349.0)), None);
        assert_eq!(MenuItem::at(Vec2::new(464.0, 400.0)), None);
        assert_eq!(MenuItem::at(Vec2::new(736.0, 400.0)), None);
    }

    #[test]
    fn test_escape_toggles_menu() {
        let mut g = game();
        run(&mut g, &[ESC]);
        assert_eq!(g.mode, Mode::Menu);
        run(&mut g, &[ESC]);
        assert_eq!(g.mode, Mode::Playing);
    }

    #[test]
    fn test_leaving_playing_skips_sim_and_rest_of_batch() {
        let mut g = game();
        let ticks = g.session.time_ticks;
        // The click after Escape would land on "Quit" in the menu
        let (flow, canvas) = run(&mut g, &[ESC, click(600.0, 520.0)]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(g.mode, Mode::Menu);
        assert_eq!(g.session.time_ticks, ticks);
        assert_eq!(canvas.commands[0], DrawCommand::Background);
        assert_eq!(canvas.texts().next(), Some("Меню"));
    }

    #[test]
    fn test_resuming_does_not_step_until_next_frame() {
        let mut g = game();
        run(&mut g, &[ESC]);
        run(&mut g, &[click(600.0, 360.0)]);
        assert_eq!(g.mode, Mode::Playing);
        assert_eq!(g.session.time_ticks, 0);
        run(&mut g, &[]);
        assert_eq!(g.session.time_ticks, 1);
    }

    #[test]
    fn test_resume_frame_draws_session() {
        let mut g = game();
        run(&mut g, &[ESC]);
        let (_, canvas) = run(&mut g, &[click(600.0, 360.0)]);
        assert_eq!(canvas.commands[0], DrawCommand::Background);
        assert_eq!(canvas.count_sprites(AssetKey::BallFace), SLOT_COUNT);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Score: 0", "ESC - меню"]);
        assert_eq!(g.session.time_ticks, 0);
    }

    #[test]
    fn test_click_before_escape_still_scores() {
        let session = GameSession::with_slots(3, vec![still_slot(300.0, 300.0)]);
        let mut g = Game::with_session(session, "does-not-exist/leaderboard.json");
        let (flow, _) = run(&mut g, &[click(300.0, 300.0), ESC, click(300.0, 300.0)]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(g.mode, Mode::Menu);
        assert_eq!(g.session.score, 1);
        assert_eq!(g.session.clicked.len(), 1);
        assert_eq!(g.session.time_ticks, 0);
    }

    #[test]
    fn test_quit_and_save_before_window_close_saves() {
        let mut g = game();
        run(&mut g, &[ESC]);
        let (flow, canvas) = run(
            &mut g,
            &[click(600.0, MenuItem::QuitAndSave.top() + 5.0), InputEvent::Quit],
        );
        assert_eq!(flow, Flow::Quit { save: true });
        assert!(g.session.pending_save);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_window_close_before_quit_and_save_does_not_save() {
        let mut g = game();
        run(&mut g, &[ESC]);
        let (flow, _) = run(
            &mut g,
            &[InputEvent::Quit, click(600.0, MenuItem::QuitAndSave.top() + 5.0)],
        );
        assert_eq!(flow, Flow::Quit { save: false });
        assert!(!g.session.pending_save);
    }

    #[test]
    fn test_quit_items() {
        let mut g = game();
        run(&mut g, &[ESC]);
        assert_eq!(run(&mut g, &[click(600.0, 520.0)]).0, Flow::Quit { save: false });
        assert!(!g.session.pending_save);

        let mut g = game();
        run(&mut g, &[ESC]);
        assert_eq!(run(&mut g, &[click(600.0, 560.0)]).0, Flow::Quit { save: true });
        assert!(g.session.pending_save);
    }

    #[test]
    fn test_window_close_from_every_mode() {
        let screens = [
            vec![],
            vec![ESC],
            vec![ESC, click(600.0, 400.0)],
            vec![ESC, click(600.0, 440.0)],
            vec![ESC, click(600.0, 480.0)],
        ];
        for path in screens {
            let mut g = game();
            for event in path {
                run(&mut g, &[event]);
            }
            let (flow, canvas) = run(&mut g, &[ESC, click(600.0, 360.0), InputEvent::Quit]);
            assert_eq!(flow, Flow::Quit { save: false });
            assert!(canvas.is_empty());
        }
    }

    #[test]
    fn test_settings_toggle() {
        let mut g = game();
        run(&mut g, &[ESC]);
        run(&mut g, &[click(600.0, 400.0)]);
        assert_eq!(g.mode, Mode::Settings);

        let (_, canvas) = run(&mut g, &[click(800.0, 360.0)]);
        assert!(g.settings.show_hitboxes);
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, vec!["Рисовать хитбоксы", "True"]);
        assert!(!canvas.commands.contains(&DrawCommand::Background));

        // Outside the toggle
        run(&mut g, &[click(700.0, 360.0), click(800.0, 390.0)]);
        assert!(g.settings.show_hitboxes);

        run(&mut g, &[ESC]);
        assert_eq!(g.mode, Mode::Menu);
    }

    #[test]
    fn test_tutorial_screen() {
        let mut g = game();
        run(&mut g, &[ESC]);
        let (_, canvas) = run(&mut g, &[click(600.0, 480.0)]);
        assert_eq!(g.mode, Mode::Tutorial);
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts[0], "Обучение");
        assert_eq!(&texts[1..], &TUTORIAL_LINES[..]);

        // Clicks do nothing on read-only screens
        run(&mut g, &[click(600.0, 520.0)]);
        assert_eq!(g.mode, Mode::Tutorial);
        run(&mut g, &[ESC]);
        assert_eq!(g.mode, Mode::Menu);
    }

    #[test]
    fn test_missing_leaderboard_shows_title_only() {
        let mut g = game();
        run(&mut g, &[ESC]);
        let (_, canvas) = run(&mut g, &[click(600.0, 440.0)]);
        assert_eq!(g.mode, Mode::Leaderboard(Vec::new()));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Таблица лидеров"]);
    }

    #[test]
    fn test_leaderboard_rows_layout() {
        let rows = vec![("Bob".to_string(), 17), ("Alice".to_string(), 9)];
        let mut canvas = DrawList::new();
        draw_leaderboard(&rows, &mut canvas);
        assert_eq!(
            canvas.commands[1],
            DrawCommand::Text {
                text: "1. Bob".into(),
                pos: Vec2::new(100.0, 370.0),
                size: ITEM_SIZE,
                anchor: Anchor::Left,
            }
        );
        assert_eq!(
            canvas.commands[4],
            DrawCommand::Text {
                text: "9 pts.".into(),
                pos: Vec2::new(1000.0, 410.0),
                size: ITEM_SIZE,
                anchor: Anchor::Center,
            }
        );
    }

    #[test]
    fn test_playing_frame_draws_background_then_hud() {
        let mut g = game();
        let (flow, canvas) = run(&mut g, &[]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(canvas.commands[0], DrawCommand::Background);
        assert_eq!(canvas.texts().last(), Some("ESC - меню"));
        assert_eq!(g.session.time_ticks, 1);
    }
}

//! Native window and event loop
//!
//! Translates winit events into [`InputEvent`]s, runs one [`Game::frame`] per
//! [`FrameClock`] deadline and hands the recorded draw list to the renderer.

use std::mem;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::canvas::DrawList;
use crate::consts::{X_BORDER, Y_BORDER};
use crate::driver::FrameClock;
use crate::modes::{Flow, Game, InputEvent, Key};
use crate::renderer::{RenderState, TextRenderer, tessellate};

pub const WINDOW_TITLE: &str = "Squid Rescue";

/// Cursor position in whole logical pixels
pub fn cursor_to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x.floor() as f32, logical.y.floor() as f32)
}

fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

struct App {
    game: Game,
    text: TextRenderer,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    clock: FrameClock,
    events: Vec<InputEvent>,
    cursor: Vec2,
    draw_list: DrawList,
    outcome: Option<Flow>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(game: Game, text: TextRenderer) -> Self {
        Self {
            game,
            text,
            window: None,
            render: None,
            clock: FrameClock::new(Instant::now()),
            events: Vec::new(),
            cursor: Vec2::ZERO,
            draw_list: DrawList::new(),
            outcome: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(X_BORDER as f64, Y_BORDER as f64))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let size = window.inner_size();
        log::info!(
            "Window: {}x{} physical, scale={}",
            size.width,
            size.height,
            window.scale_factor()
        );

        self.render = Some(pollster::block_on(RenderState::new(window.clone()))?);
        self.window = Some(window);
        self.clock = FrameClock::new(Instant::now());
        Ok(())
    }

    /// Step the game once and present the result
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let events = mem::take(&mut self.events);
        self.draw_list.clear();

        match self.game.frame(&events, &mut self.draw_list) {
            Flow::Continue => self.present(event_loop),
            flow => {
                self.outcome = Some(flow);
                event_loop.exit();
            }
        }
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = self.render.as_mut() else {
            return;
        };
        let vertices = tessellate(&self.draw_list.commands, &mut self.text);
        match render.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => render.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e.context("start renderer"));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.outcome.is_some() {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                // Handled right away rather than at the next deadline
                self.events.push(InputEvent::Quit);
                self.run_frame(event_loop);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                self.cursor = cursor_to_logical(position, scale);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.events.push(InputEvent::MouseDown(self.cursor));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.events.push(InputEvent::KeyDown(key_from_code(code)));
            }
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    render.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_none() || self.outcome.is_some() {
            return;
        }
        if self.clock.poll(Instant::now()) {
            self.run_frame(event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

/// Open the window and run frames until the player quits.
///
/// Returns the game (for the final score) and how the loop ended. Closing
/// the window counts as a quit without saving unless quit-and-save was
/// chosen earlier in the same frame.
pub fn run(game: Game, text: TextRenderer) -> anyhow::Result<(Game, Flow)> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(game, text);
    event_loop.run_app(&mut app)?;

    let App {
        game,
        outcome,
        error,
        ..
    } = app;
    if let Some(e) = error {
        return Err(e);
    }
    Ok((game, outcome.unwrap_or(Flow::Quit { save: false })))
}

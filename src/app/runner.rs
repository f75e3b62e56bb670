//! Main application handler for the demo game

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use super::controls::Controls;
use crate::config::{AppConfig, WindowConfig};
use crate::input::{CursorStyle, HeadlessSurface, InputManager, WinitInput, WinitSurface};

/// Demo player moved by the controls
#[derive(Debug, Default, Clone, Copy)]
struct Player {
    x: f32,
    y: f32,
    zoom: i32,
}

/// Movement speed for held keys, in units per second
const MOVE_SPEED: f32 = 200.0;

/// Main game application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    input: Arc<InputManager>,
    winit_input: WinitInput,
    controls: Controls,
    player: Player,
    last_update: Option<Instant>,
}

impl App {
    /// Creates a new game application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting game");
        info!(?config.window, ?config.input, "Configuration");

        // No window yet; the real surface is attached in resumed()
        let input = Arc::new(InputManager::new(Arc::new(HeadlessSurface)));
        let controls = Controls::new();
        controls.bind(&input);

        Self {
            winit_input: WinitInput::new(&config.input),
            config,
            window: None,
            input,
            controls,
            player: Player::default(),
            last_update: None,
        }
    }

    /// Creates a new game application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    fn set_relative_mouse(&self, enabled: bool) {
        self.input.set_relative_mouse_mode(enabled);
        let active = self.input.is_relative_mouse_mode();
        if enabled && !active {
            warn!("Relative mouse mode not supported here, staying in absolute mode");
        }

        if self.config.input.hide_cursor {
            let style = if active {
                CursorStyle::Hidden
            } else {
                CursorStyle::Default
            };
            self.input.set_cursor(style);
        }
    }

    /// Reads the controls and advances the demo player
    fn process_controls(&mut self, event_loop: &ActiveEventLoop, delta_time: f32) {
        let controls = &self.controls;

        if controls.exit.is_pressed() {
            info!("Exit requested");
            event_loop.exit();
            return;
        }

        if controls.toggle_mouse.is_pressed() {
            let enabled = !self.input.is_relative_mouse_mode();
            self.set_relative_mouse(enabled);
            // Nothing pressed in the old mode should carry over
            self.input.reset_all_actions();
            return;
        }

        let dx = controls.move_right.amount() as f32 - controls.move_left.amount() as f32;
        let dy = controls.move_down.amount() as f32 - controls.move_up.amount() as f32;
        if dx != 0.0 || dy != 0.0 {
            self.player.x += dx * MOVE_SPEED * delta_time;
            self.player.y += dy * MOVE_SPEED * delta_time;
            debug!(x = self.player.x, y = self.player.y, "Player moved");
        }

        let zoom = controls.zoom_in.amount() as i32 - controls.zoom_out.amount() as i32;
        if zoom != 0 {
            self.player.zoom += zoom;
            debug!(zoom = self.player.zoom, "Zoom changed");
        }

        if controls.jump.is_pressed() {
            info!(x = self.player.x, y = self.player.y, "Jump");
        }
        if controls.fire.is_pressed() {
            info!(
                mouse_x = self.input.mouse_x(),
                mouse_y = self.input.mouse_y(),
                "Fire"
            );
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Creates window attributes from configuration
fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );

                let window = Arc::new(window);
                self.input
                    .set_surface(Arc::new(WinitSurface::new(Arc::clone(&window))));
                self.window = Some(window);
                self.last_update = Some(Instant::now());

                if self.config.input.relative_mouse {
                    self.set_relative_mouse(true);
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(last_update) = self.last_update else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        self.process_controls(event_loop, delta_time);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.winit_input.handle_window_event(&self.input, &event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                // Key releases while unfocused never arrive
                debug!("Focus lost, resetting actions");
                self.input.reset_all_actions();
            }
            WindowEvent::Resized(size) => {
                debug!(width = size.width, height = size.height, "Resized");
            }
            _ => {}
        }
    }
}

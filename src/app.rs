//! Application state
//!
//! Owns the round, the camera and the HUD, and routes input between them.
//! Input order for a press: HUD first (dialog, top bar, tap-to-resume), then
//! the hit test on the map, then the gesture tracker.

use macroquad::logging::{debug, info};
use macroquad::prelude::*;
use crate::assets::GameTextures;
use crate::camera::MapCamera;
use crate::config::HuntConfig;
use crate::hud::{self, HudLayout, HudState};
use crate::hunt::{HuntEvent, HuntSession};
use crate::input::{Action, GestureTracker, PointerEvent};
use crate::render;

/// Why the round is paused; the session stays paused while any is set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseReasons {
    /// Pause key
    pub user: bool,
    /// Viewport taller than wide
    pub portrait: bool,
}

impl PauseReasons {
    pub fn any(&self) -> bool {
        self.user || self.portrait
    }
}

pub struct AppState {
    pub config: HuntConfig,
    pub camera: MapCamera,
    pub gestures: GestureTracker,
    pub session: HuntSession,
    pub hud: HudState,
    pub textures: GameTextures,
    pub layout: HudLayout,
    pub pause: PauseReasons,
}

impl AppState {
    pub fn new(config: HuntConfig, textures: GameTextures, viewport: Vec2) -> Self {
        let camera = new_camera(&config, &textures, viewport);
        let session = HuntSession::new(&config, &textures.target_sizes());
        let hud = HudState::new(session.target_count());
        let layout = HudLayout::new(viewport.x, viewport.y, session.target_count());

        let mut app = Self {
            config,
            camera,
            gestures: GestureTracker::new(),
            session,
            hud,
            textures,
            layout,
            pause: PauseReasons::default(),
        };
        app.resize(viewport);
        app
    }

    /// One frame of input and simulation
    pub fn step(&mut self, dt: f32, viewport: Vec2, pointers: &[PointerEvent], actions: &[Action]) {
        if viewport != self.camera.viewport() {
            self.resize(viewport);
        }
        for &action in actions {
            self.handle_action(action);
        }
        for &event in pointers {
            self.handle_pointer(event);
        }
        self.update(dt);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.camera.set_viewport(viewport);
        self.layout = HudLayout::new(viewport.x, viewport.y, self.session.target_count());

        let portrait = viewport.y > viewport.x;
        if portrait != self.pause.portrait {
            info!("Orientation changed: {}", if portrait { "portrait" } else { "landscape" });
            self.pause.portrait = portrait;
            self.sync_pause();
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::TogglePause => {
                if !self.session.is_over() {
                    self.pause.user = !self.pause.user;
                    self.sync_pause();
                }
            }
            Action::ZoomIn | Action::ZoomOut => {
                if self.session.accepts_input() {
                    let step = self.config.camera.key_step;
                    let step = if action == Action::ZoomIn { step } else { -step };
                    self.camera.zoom_by(step);
                }
            }
            Action::Restart => self.restart(),
            Action::Confirm => self.hud.close_dialog(),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Down { pos, .. } = event {
            if self.press_consumed_by_hud(pos) {
                return;
            }
            if self.session.accepts_input() {
                let world = self.camera.screen_to_world(pos);
                self.session.press(world);
            }
        }
        let enabled = self.session.accepts_input();
        self.gestures.handle(event, &mut self.camera, enabled);
    }

    pub fn update(&mut self, dt: f32) {
        self.session.tick(dt);
        self.hud.update(dt);

        let events: Vec<_> = self.session.drain_events().collect();
        for event in &events {
            self.hud.on_event(event);
            self.log_event(event);
        }
    }

    pub fn draw(&self) {
        clear_background(hud::theme::BACKDROP);
        render::draw_scene(&self.camera, &self.session, &self.textures);
        hud::draw_hud(
            &self.hud,
            &self.layout,
            &self.session,
            &self.textures,
            self.pause.portrait,
        );
    }

    /// Start over: fresh round, fresh camera, no pointers held
    pub fn restart(&mut self) {
        self.session.restart();
        self.hud.reset();
        self.gestures.reset();
        self.camera = new_camera(&self.config, &self.textures, self.camera.viewport());
        self.pause.user = false;
        self.sync_pause();
        info!("Round restarted");
    }

    fn press_consumed_by_hud(&mut self, pos: Vec2) -> bool {
        if self.hud.handle_press(pos, &self.layout) {
            return true;
        }
        // Tap anywhere resumes a user pause; a portrait pause needs rotation
        if self.pause.user && !self.session.is_over() {
            self.pause.user = false;
            self.sync_pause();
            return true;
        }
        self.layout.top_bar.contains(pos)
    }

    fn sync_pause(&mut self) {
        if self.pause.any() {
            self.session.pause();
        } else {
            self.session.resume();
        }
    }

    fn log_event(&self, event: &HuntEvent) {
        match *event {
            HuntEvent::TargetFound { index, score } => {
                let name = self.session.targets().get(index).map_or("?", |t| t.name.as_str());
                info!("Found {} ({}/{})", name, score, self.session.target_count());
            }
            HuntEvent::SecondElapsed { remaining } => debug!("{} seconds left", remaining),
            HuntEvent::Finished(outcome) => info!(
                "Round over: {} {} (score {})",
                outcome.title(),
                outcome.detail(),
                self.session.score()
            ),
            HuntEvent::Paused => info!("Game paused"),
            HuntEvent::Resumed => info!("Game resumed"),
        }
    }
}

fn new_camera(config: &HuntConfig, textures: &GameTextures, viewport: Vec2) -> MapCamera {
    MapCamera::new(
        textures.map_size(config),
        viewport,
        config.design_width,
        &config.camera,
    )
}

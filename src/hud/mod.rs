//! Heads-up display
//!
//! Drawn in screen space over the map: a top bar with one icon per stag and
//! the clock, the result dialog, and the pause overlay.

mod layout;
pub mod theme;

pub use layout::HudLayout;

use macroquad::prelude::*;
use crate::assets::GameTextures;
use crate::hunt::{HuntEvent, HuntSession, Outcome};
use crate::input::Action;
use theme::*;

/// How long a score icon pops after its stag is found
pub const ICON_POP_SECS: f32 = 0.5;

/// Extra scale at the top of an icon pop
const ICON_POP_SCALE: f32 = 0.35;

#[derive(Debug, Clone)]
pub struct HudState {
    /// Remaining pop time per icon
    icon_pops: Vec<f32>,
    dialog_open: bool,
}

impl HudState {
    pub fn new(icon_count: usize) -> Self {
        Self {
            icon_pops: vec![0.0; icon_count],
            dialog_open: false,
        }
    }

    pub fn reset(&mut self) {
        self.icon_pops.iter_mut().for_each(|t| *t = 0.0);
        self.dialog_open = false;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn on_event(&mut self, event: &HuntEvent) {
        match *event {
            HuntEvent::TargetFound { index, .. } => {
                if let Some(pop) = self.icon_pops.get_mut(index) {
                    *pop = ICON_POP_SECS;
                }
            }
            HuntEvent::Finished(_) => self.dialog_open = true,
            _ => {}
        }
    }

    pub fn update(&mut self, dt: f32) {
        for pop in &mut self.icon_pops {
            *pop = (*pop - dt).max(0.0);
        }
    }

    /// Icon scale: a single bump from 1 up and back over `ICON_POP_SECS`
    pub fn icon_scale(&self, index: usize) -> f32 {
        let remaining = self.icon_pops.get(index).copied().unwrap_or(0.0);
        if remaining <= 0.0 {
            return 1.0;
        }
        let t = 1.0 - remaining / ICON_POP_SECS;
        1.0 + ICON_POP_SCALE * (t * std::f32::consts::PI).sin()
    }

    /// Route a press to the HUD. Returns true when the HUD consumed it.
    /// While the dialog is open every press is consumed; the close button
    /// or a press outside the dialog closes it.
    pub fn handle_press(&mut self, pos: Vec2, layout: &HudLayout) -> bool {
        if !self.dialog_open {
            return false;
        }
        if layout.close_button.contains(pos) || !layout.dialog.contains(pos) {
            self.dialog_open = false;
        }
        true
    }
}

pub fn draw_hud(
    hud: &HudState,
    layout: &HudLayout,
    session: &HuntSession,
    textures: &GameTextures,
    orientation_paused: bool,
) {
    draw_top_bar(hud, layout, session, textures);

    if let Some(outcome) = session.outcome() {
        if hud.is_dialog_open() {
            draw_result_dialog(layout, session, outcome);
        }
    } else if session.is_paused() {
        draw_pause_overlay(layout, orientation_paused);
    }
}

fn draw_top_bar(hud: &HudState, layout: &HudLayout, session: &HuntSession, textures: &GameTextures) {
    let bar = layout.top_bar;
    draw_rectangle(bar.x, bar.y, bar.w, bar.h, BAR_BG);

    for (i, (slot, target)) in layout.icons.iter().zip(session.targets()).enumerate() {
        let scale = hud.icon_scale(i);
        let size = slot.w * scale;
        let center = slot.center();
        let dest = Rect::new(center.x - size * 0.5, center.y - size * 0.5, size, size);

        if target.is_found() {
            draw_circle_lines(center.x, center.y, size * 0.55, 3.0, ICON_FOUND_RING);
        }

        let tint = if target.is_found() { WHITE } else { ICON_HIDDEN };
        match textures.targets.get(i).and_then(|t| t.base.as_ref()) {
            Some(texture) => draw_texture_ex(
                texture,
                dest.x,
                dest.y,
                tint,
                DrawTextureParams {
                    dest_size: Some(fit_inside(texture.size(), dest.size())),
                    ..Default::default()
                },
            ),
            None => draw_circle(center.x, center.y, size * 0.4, tint),
        }
    }

    let clock = session.clock();
    let clock_color = if session.time_left() <= LOW_TIME_SECS && !session.is_over() {
        TEXT_ALERT
    } else {
        TEXT_COLOR
    };
    draw_text_centered(&clock, layout.timer.center(), FONT_SIZE_CLOCK, clock_color);
}

fn draw_result_dialog(layout: &HudLayout, session: &HuntSession, outcome: Outcome) {
    let s = layout.screen;
    draw_rectangle(s.x, s.y, s.w, s.h, SCRIM);

    let d = layout.dialog;
    draw_rectangle(d.x, d.y, d.w, d.h, DIALOG_BG);
    draw_rectangle_lines(d.x, d.y, d.w, d.h, 3.0, DIALOG_BORDER);

    let title_color = if outcome.is_win() { TEXT_WIN } else { TEXT_ALERT };
    let cx = d.x + d.w * 0.5;
    draw_text_centered(outcome.title(), vec2(cx, d.y + d.h * 0.28), FONT_SIZE_TITLE, title_color);
    draw_text_centered(outcome.detail(), vec2(cx, d.y + d.h * 0.48), FONT_SIZE_CONTENT, TEXT_COLOR);

    let score = format!("Found {} of {}", session.score(), session.target_count());
    draw_text_centered(&score, vec2(cx, d.y + d.h * 0.64), FONT_SIZE_CONTENT, TEXT_COLOR);

    let hint = format!("{}    {}", Action::Restart.hint(), Action::Confirm.hint());
    draw_text_centered(&hint, vec2(cx, d.y + d.h * 0.85), FONT_SIZE_SMALL, TEXT_DIM);

    // Close "x"
    let c = layout.close_button;
    let inset = c.w * 0.3;
    draw_line(c.x + inset, c.y + inset, c.x + c.w - inset, c.y + c.h - inset, 2.0, TEXT_DIM);
    draw_line(c.x + c.w - inset, c.y + inset, c.x + inset, c.y + c.h - inset, 2.0, TEXT_DIM);
}

fn draw_pause_overlay(layout: &HudLayout, orientation_paused: bool) {
    let s = layout.screen;
    draw_rectangle(s.x, s.y, s.w, s.h, SCRIM);

    let center = s.center();
    draw_text_centered("Paused", center, FONT_SIZE_TITLE, TEXT_COLOR);
    if !orientation_paused {
        let hint = Action::TogglePause.hint();
        draw_text_centered(hint, center + vec2(0.0, FONT_SIZE_TITLE), FONT_SIZE_SMALL, TEXT_DIM);
    }
}

/// Draw text with its visual center at `center`
fn draw_text_centered(text: &str, center: Vec2, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        center.x - dims.width * 0.5,
        center.y + dims.offset_y * 0.5,
        size,
        color,
    );
}

/// Largest size with the texture's aspect ratio that fits in `bounds`
pub fn fit_inside(size: Vec2, bounds: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / size.x).min(bounds.y / size.y);
    size * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HuntConfig;

    #[test]
    fn test_found_event_pops_icon() {
        let mut hud = HudState::new(5);
        assert!((hud.icon_scale(2) - 1.0).abs() < 0.001);

        hud.on_event(&HuntEvent::TargetFound { index: 2, score: 1 });
        hud.update(ICON_POP_SECS * 0.5);
        assert!((hud.icon_scale(2) - (1.0 + ICON_POP_SCALE)).abs() < 0.001);
        assert!((hud.icon_scale(1) - 1.0).abs() < 0.001);

        hud.update(ICON_POP_SECS);
        assert!((hud.icon_scale(2) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut hud = HudState::new(2);
        hud.on_event(&HuntEvent::TargetFound { index: 7, score: 1 });
        assert!((hud.icon_scale(7) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_dialog_open_and_close() {
        let layout = HudLayout::new(1280.0, 720.0, 5);
        let mut hud = HudState::new(5);

        // Closed dialog consumes nothing
        assert!(!hud.handle_press(layout.dialog.center(), &layout));

        hud.on_event(&HuntEvent::Finished(Outcome::TimeUp));
        assert!(hud.is_dialog_open());

        // Inside the dialog: consumed, stays open
        assert!(hud.handle_press(layout.dialog.center(), &layout));
        assert!(hud.is_dialog_open());

        // Close button
        assert!(hud.handle_press(layout.close_button.center(), &layout));
        assert!(!hud.is_dialog_open());

        // Outside click also closes
        hud.on_event(&HuntEvent::Finished(Outcome::AllFound));
        assert!(hud.handle_press(vec2(5.0, 5.0), &layout));
        assert!(!hud.is_dialog_open());
    }

    #[test]
    fn test_reset() {
        let mut hud = HudState::new(5);
        hud.on_event(&HuntEvent::TargetFound { index: 0, score: 1 });
        hud.on_event(&HuntEvent::Finished(Outcome::AllFound));
        hud.reset();
        assert!(!hud.is_dialog_open());
        assert!((hud.icon_scale(0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_inside_keeps_aspect() {
        let fitted = fit_inside(vec2(400.0, 200.0), vec2(60.0, 60.0));
        assert!((fitted.x - 60.0).abs() < 0.001);
        assert!((fitted.y - 30.0).abs() < 0.001);
        assert_eq!(fit_inside(vec2(0.0, 10.0), vec2(5.0, 5.0)), vec2(5.0, 5.0));
    }

    #[test]
    fn test_hud_tracks_session_events() {
        let config = HuntConfig::embedded().unwrap();
        let mut session = HuntSession::new(&config, &[]);
        let mut hud = HudState::new(session.target_count());

        let spots: Vec<_> = session.targets().iter().map(|t| t.position).collect();
        for spot in spots {
            session.press(spot);
        }
        for event in session.drain_events() {
            hud.on_event(&event);
        }
        assert!(hud.is_dialog_open());
        assert!(hud.icon_pops.iter().all(|&pop| pop > 0.0));
    }
}

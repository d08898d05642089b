//! HUD layout
//!
//! All HUD rectangles are computed from the screen size each frame, so the
//! HUD follows window resizes and phone rotations.

use macroquad::math::Rect;

const MIN_BAR_HEIGHT: f32 = 48.0;
const MAX_BAR_HEIGHT: f32 = 96.0;
const DIALOG_MAX_W: f32 = 520.0;
const DIALOG_MAX_H: f32 = 300.0;
const CLOSE_SIZE: f32 = 36.0;

#[derive(Debug, Clone)]
pub struct HudLayout {
    pub screen: Rect,
    pub top_bar: Rect,
    /// One slot per target, left to right
    pub icons: Vec<Rect>,
    pub timer: Rect,
    pub dialog: Rect,
    pub close_button: Rect,
}

impl HudLayout {
    pub fn new(screen_w: f32, screen_h: f32, icon_count: usize) -> Self {
        let screen = Rect::new(0.0, 0.0, screen_w, screen_h);
        let bar_h = (screen_h * 0.09).clamp(MIN_BAR_HEIGHT, MAX_BAR_HEIGHT);
        let top_bar = Rect::new(0.0, 0.0, screen_w, bar_h);

        let pad = bar_h * 0.15;
        let timer_w = bar_h * 2.4;
        let timer_h = bar_h - pad * 2.0;
        let timer = Rect::new(screen_w - timer_w - pad, pad, timer_w, timer_h);

        // Icons shrink when the row would run under the timer
        let room = (timer.x - pad * 2.0).max(0.0);
        let pitch = if icon_count == 0 {
            0.0
        } else {
            (timer_h * 1.25).min(room / icon_count as f32)
        };
        let icon = pitch * 0.8;
        let icon_y = pad + (timer_h - icon) * 0.5;
        let icons = (0..icon_count)
            .map(|i| Rect::new(pad + i as f32 * pitch, icon_y, icon, icon))
            .collect();

        let dialog_w = (screen_w * 0.8).min(DIALOG_MAX_W);
        let dialog_h = (screen_h * 0.6).min(DIALOG_MAX_H);
        let dialog = Rect::new(
            (screen_w - dialog_w) * 0.5,
            (screen_h - dialog_h) * 0.5,
            dialog_w,
            dialog_h,
        );
        let close_button = Rect::new(
            dialog.x + dialog.w - CLOSE_SIZE - 8.0,
            dialog.y + 8.0,
            CLOSE_SIZE,
            CLOSE_SIZE,
        );

        Self { screen, top_bar, icons, timer, dialog, close_button }
    }
}

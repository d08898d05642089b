//! Hidden targets

use macroquad::math::{vec2, Rect, Vec2};
use crate::config::{PulseConfig, TargetDef};
use super::Pulse;

/// Hit area used when a target's texture could not be loaded
pub const FALLBACK_TARGET_SIZE: Vec2 = vec2(256.0, 256.0);

#[derive(Debug, Clone)]
pub struct HiddenTarget {
    pub index: usize,
    pub name: String,
    /// World-space center
    pub position: Vec2,
    pub scale: f32,
    /// Unscaled texture size
    pub size: Vec2,
    found: bool,
    pulse: Option<Pulse>,
}

impl HiddenTarget {
    pub fn new(index: usize, def: &TargetDef, size: Vec2) -> Self {
        Self {
            index,
            name: def.name.clone(),
            position: vec2(def.x, def.y),
            scale: def.scale,
            size,
            found: false,
            pulse: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Mark as found and start the pulse
    pub fn mark_found(&mut self, pulse: &PulseConfig) {
        self.found = true;
        self.pulse = Some(Pulse::new(pulse));
    }

    pub fn reset(&mut self) {
        self.found = false;
        self.pulse = None;
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    pub fn advance_pulse(&mut self, dt: f32) {
        if let Some(pulse) = &mut self.pulse {
            pulse.advance(dt);
            if pulse.is_finished() {
                self.pulse = None;
            }
        }
    }

    /// Scale including the running pulse
    pub fn display_scale(&self) -> f32 {
        self.scale * self.pulse.map_or(1.0, |p| p.factor())
    }

    /// Clickable area: the texture rect at base scale, centered on `position`
    pub fn world_rect(&self) -> Rect {
        rect_centered(self.position, self.size * self.scale)
    }

    /// Drawn area: like `world_rect` but following the pulse
    pub fn display_rect(&self) -> Rect {
        rect_centered(self.position, self.size * self.display_scale())
    }

    pub fn contains(&self, world: Vec2) -> bool {
        let r = self.world_rect();
        world.x >= r.x && world.x < r.x + r.w && world.y >= r.y && world.y < r.y + r.h
    }
}

fn rect_centered(center: Vec2, size: Vec2) -> Rect {
    Rect::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> HiddenTarget {
        let def = TargetDef {
            name: "Stag".to_string(),
            texture: "stag.png".to_string(),
            found_texture: None,
            x: 1000.0,
            y: 500.0,
            scale: 0.5,
        };
        HiddenTarget::new(0, &def, vec2(200.0, 100.0))
    }

    #[test]
    fn test_hit_area_is_scaled_and_centered() {
        let t = target();
        let r = t.world_rect();
        assert!((r.w - 100.0).abs() < 0.001);
        assert!((r.h - 50.0).abs() < 0.001);
        assert!((r.x - 950.0).abs() < 0.001);

        assert!(t.contains(vec2(1000.0, 500.0)));
        assert!(t.contains(vec2(951.0, 476.0)));
        assert!(!t.contains(vec2(1051.0, 500.0)));
        assert!(!t.contains(vec2(1000.0, 526.0)));
    }

    #[test]
    fn test_pulse_grows_display_not_hit_area() {
        let mut t = target();
        t.mark_found(&PulseConfig::default());
        t.advance_pulse(0.2);
        assert!((t.display_scale() - 0.6).abs() < 0.001);
        assert!((t.world_rect().w - 100.0).abs() < 0.001);
        assert!((t.display_rect().w - 120.0).abs() < 0.01);

        t.advance_pulse(1.0);
        assert!(!t.is_pulsing());
        assert!(t.is_found());
        assert!((t.display_scale() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_reset_clears_found() {
        let mut t = target();
        t.mark_found(&PulseConfig::default());
        t.reset();
        assert!(!t.is_found());
        assert!(!t.is_pulsing());
    }
}

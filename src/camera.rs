//! Map camera
//!
//! A 2D camera over the map image. Zoom values are relative to the design
//! canvas width, so a zoom of 1.0 shows `design_width` world units across
//! regardless of the real window size. The camera zooms around its center and
//! never shows anything outside the map: on an axis where the visible extent
//! is larger than the map, the map is centered instead.

use macroquad::math::{vec2, Rect, Vec2};
use crate::config::CameraConfig;

#[derive(Debug, Clone)]
pub struct MapCamera {
    /// World point at the center of the viewport
    center: Vec2,
    zoom: f32,
    map_size: Vec2,
    /// Viewport size in screen pixels
    viewport: Vec2,
    design_width: f32,
    min_zoom: f32,
    max_zoom: f32,
    wheel_step: f32,
}

impl MapCamera {
    pub fn new(map_size: Vec2, viewport: Vec2, design_width: f32, config: &CameraConfig) -> Self {
        let mut camera = Self {
            center: map_size * 0.5,
            zoom: config.initial_zoom,
            map_size,
            viewport: sanitize_viewport(viewport),
            design_width: design_width.max(1.0),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            wheel_step: config.wheel_step,
        };
        camera.zoom = camera.clamp_zoom(config.initial_zoom);
        camera.clamp_center();
        camera
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn map_size(&self) -> Vec2 {
        self.map_size
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Screen pixels per world unit at the current zoom
    pub fn pixels_per_unit(&self) -> f32 {
        self.zoom * self.viewport.x / self.design_width
    }

    /// Size of the visible world area
    pub fn visible_extent(&self) -> Vec2 {
        self.viewport / self.pixels_per_unit()
    }

    pub fn visible_world_rect(&self) -> Rect {
        let extent = self.visible_extent();
        let origin = self.center - extent * 0.5;
        Rect::new(origin.x, origin.y, extent.x, extent.y)
    }

    /// Window resized; zero-sized viewports (minimized window) are ignored
    pub fn set_viewport(&mut self, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.viewport = viewport;
        self.clamp_center();
    }

    pub fn center_on(&mut self, world: Vec2) {
        self.center = world;
        self.clamp_center();
    }

    /// Move the map with the pointer: the world point under the pointer stays
    /// under it (unless the bounds stop the camera)
    pub fn pan_by_screen_delta(&mut self, delta: Vec2) {
        self.center -= delta / self.pixels_per_unit();
        self.clamp_center();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = self.clamp_zoom(zoom);
        self.clamp_center();
    }

    pub fn zoom_by(&mut self, step: f32) {
        self.set_zoom(self.zoom + step);
    }

    /// Wheel zoom with the DOM sign convention: positive `delta_y` scrolls
    /// down and zooms out
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.zoom_by(-self.wheel_step);
        } else if delta_y < 0.0 {
            self.zoom_by(self.wheel_step);
        }
    }

    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.center + (screen - self.viewport * 0.5) / self.pixels_per_unit()
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.center) * self.pixels_per_unit() + self.viewport * 0.5
    }

    fn clamp_center(&mut self) {
        let extent = self.visible_extent();
        self.center = vec2(
            clamp_axis(self.center.x, extent.x, self.map_size.x),
            clamp_axis(self.center.y, extent.y, self.map_size.y),
        );
    }
}

fn clamp_axis(center: f32, extent: f32, map: f32) -> f32 {
    if extent >= map {
        map * 0.5
    } else {
        let half = extent * 0.5;
        center.clamp(half, map - half)
    }
}

fn sanitize_viewport(viewport: Vec2) -> Vec2 {
    vec2(viewport.x.max(1.0), viewport.y.max(1.0))
}

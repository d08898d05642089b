//! Pan and pinch gestures
//!
//! One active pointer drags the map. Two active pointers pinch-zoom: the zoom
//! follows the ratio between the current finger distance and the distance when
//! the second finger landed. Pointers are always tracked so the gesture state
//! stays consistent across pauses; the camera only moves while `enabled`.

use macroquad::math::Vec2;
use crate::camera::MapCamera;
use super::{PointerEvent, PointerId};

#[derive(Debug, Clone, Copy)]
struct ActivePointer {
    id: PointerId,
    pos: Vec2,
}

/// Baseline captured when the pinch started
#[derive(Debug, Clone, Copy)]
struct Pinch {
    initial_distance: f32,
    initial_zoom: f32,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Pointers currently down, in press order
    pointers: Vec<ActivePointer>,
    /// Last position of the dragging pointer
    drag_last: Option<Vec2>,
    pinch: Option<Pinch>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Forget all pointers (e.g. when the round restarts)
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.drag_last = None;
        self.pinch = None;
    }

    pub fn handle(&mut self, event: PointerEvent, camera: &mut MapCamera, enabled: bool) {
        match event {
            PointerEvent::Down { id, pos } => {
                // A repeated down for a known id replaces it
                self.pointers.retain(|p| p.id != id);
                self.pointers.push(ActivePointer { id, pos });
                self.refresh_gesture(camera);
            }
            PointerEvent::Move { id, pos } => {
                let Some(pointer) = self.pointers.iter_mut().find(|p| p.id == id) else {
                    return;
                };
                pointer.pos = pos;
                self.apply_move(pos, camera, enabled);
            }
            PointerEvent::Up { id } => {
                let before = self.pointers.len();
                self.pointers.retain(|p| p.id != id);
                if self.pointers.len() != before {
                    self.refresh_gesture(camera);
                }
            }
            PointerEvent::Wheel { delta_y } => {
                if enabled {
                    camera.zoom_by_wheel(delta_y);
                }
            }
        }
    }

    /// Pick drag or pinch after the pointer set changed
    fn refresh_gesture(&mut self, camera: &MapCamera) {
        match self.pointers.as_slice() {
            [single] => {
                self.drag_last = Some(single.pos);
                self.pinch = None;
            }
            [a, b] => {
                self.drag_last = None;
                self.pinch = Some(Pinch {
                    initial_distance: a.pos.distance(b.pos),
                    initial_zoom: camera.zoom(),
                });
            }
            _ => {
                self.drag_last = None;
                self.pinch = None;
            }
        }
    }

    fn apply_move(&mut self, pos: Vec2, camera: &mut MapCamera, enabled: bool) {
        if let Some(last) = self.drag_last {
            if enabled {
                camera.pan_by_screen_delta(pos - last);
            }
            self.drag_last = Some(pos);
            return;
        }

        let (Some(pinch), [a, b]) = (self.pinch, self.pointers.as_slice()) else {
            return;
        };
        if !enabled || pinch.initial_distance <= f32::EPSILON {
            return;
        }
        let scale = a.pos.distance(b.pos) / pinch.initial_distance;
        camera.set_zoom(pinch.initial_zoom * scale);
    }
}

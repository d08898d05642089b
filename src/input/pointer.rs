//! Pointer polling
//!
//! macroquad reports the mouse and touches separately, and by default also
//! turns the first touch into fake mouse events. The game disables that
//! emulation and merges both sources into one stream of pointer events, so a
//! finger and the mouse are handled the same way.

use macroquad::prelude::*;

/// Stable id of a pointer for the duration of one press
pub type PointerId = u64;

/// Id used for the mouse (touch ids come from the platform)
pub const MOUSE_POINTER: PointerId = u64::MAX;

/// A pointer change in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { id: PointerId, pos: Vec2 },
    Move { id: PointerId, pos: Vec2 },
    Up { id: PointerId },
    /// Positive `delta_y` means scrolling down (DOM convention)
    Wheel { delta_y: f32 },
}

/// Converts one touch into a pointer event; stationary touches produce none
pub fn touch_event(id: u64, phase: TouchPhase, pos: Vec2) -> Option<PointerEvent> {
    match phase {
        TouchPhase::Started => Some(PointerEvent::Down { id, pos }),
        TouchPhase::Moved => Some(PointerEvent::Move { id, pos }),
        TouchPhase::Ended | TouchPhase::Cancelled => Some(PointerEvent::Up { id }),
        TouchPhase::Stationary => None,
    }
}

/// Per-frame mouse and touch polling
#[derive(Debug, Default)]
pub struct PointerInput {
    last_mouse: Option<Vec2>,
    mouse_down: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        // Touches are read directly from `touches()`
        simulate_mouse_with_touch(false);
        Self::default()
    }

    /// Collect this frame's pointer events, in order
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        let mouse = Vec2::from(mouse_position());
        self.mouse_events(
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
            mouse,
            &mut events,
        );

        let (_, wheel_y) = mouse_wheel();
        if wheel_y != 0.0 {
            events.push(PointerEvent::Wheel { delta_y: -wheel_y });
        }

        for touch in touches() {
            if let Some(event) = touch_event(touch.id, touch.phase, touch.position) {
                events.push(event);
            }
        }

        events
    }

    /// Left-button state for one frame into mouse pointer events
    pub fn mouse_events(
        &mut self,
        pressed: bool,
        released: bool,
        down: bool,
        pos: Vec2,
        events: &mut Vec<PointerEvent>,
    ) {
        if pressed {
            events.push(PointerEvent::Down { id: MOUSE_POINTER, pos });
            self.mouse_down = true;
        } else if self.mouse_down && self.last_mouse != Some(pos) {
            events.push(PointerEvent::Move { id: MOUSE_POINTER, pos });
        }

        // A release can be lost when the window loses focus mid-drag
        if self.mouse_down && (released || !down) {
            events.push(PointerEvent::Up { id: MOUSE_POINTER });
            self.mouse_down = false;
        }
        self.last_mouse = Some(pos);
    }
}

//! Keyboard actions

use macroquad::prelude::{is_key_pressed, KeyCode};

/// Everything the keyboard can trigger
///
/// Key mappings:
/// - Escape / P = Pause or resume
/// - = / keypad + = Zoom in
/// - - / keypad - = Zoom out
/// - R = Restart the round
/// - Enter / Space = Close the result dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TogglePause,
    ZoomIn,
    ZoomOut,
    Restart,
    Confirm,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::TogglePause,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::Restart,
        Action::Confirm,
    ];

    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::TogglePause => &[KeyCode::Escape, KeyCode::P],
            Action::ZoomIn => &[KeyCode::Equal, KeyCode::KpAdd],
            Action::ZoomOut => &[KeyCode::Minus, KeyCode::KpSubtract],
            Action::Restart => &[KeyCode::R],
            Action::Confirm => &[KeyCode::Enter, KeyCode::KpEnter, KeyCode::Space],
        }
    }

    /// Short hint shown in the HUD help line
    pub fn hint(self) -> &'static str {
        match self {
            Action::TogglePause => "Esc pause",
            Action::ZoomIn => "+ zoom in",
            Action::ZoomOut => "- zoom out",
            Action::Restart => "R restart",
            Action::Confirm => "Enter close",
        }
    }
}

/// Actions whose keys were pressed this frame
pub fn poll_actions() -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| action.keys().iter().any(|&key| is_key_pressed(key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_keys() {
        for action in Action::ALL {
            assert!(!action.keys().is_empty(), "{:?} has no keys", action);
            assert!(!action.hint().is_empty());
        }
    }

    #[test]
    fn test_keys_not_shared() {
        let mut seen = Vec::new();
        for action in Action::ALL {
            for key in action.keys() {
                assert!(!seen.contains(key), "{:?} bound twice", key);
                seen.push(*key);
            }
        }
    }
}

//! HUD colors and sizes

use macroquad::prelude::Color;

// =============================================================================
// Panels
// =============================================================================

/// Top bar background (semi-transparent so the map shows through)
pub const BAR_BG: Color = Color::new(0.07, 0.09, 0.08, 0.78);

/// Dialog background
pub const DIALOG_BG: Color = Color::new(0.12, 0.14, 0.13, 0.97);

/// Dialog border
pub const DIALOG_BORDER: Color = Color::new(0.55, 0.45, 0.25, 1.0);

/// Full-screen dim behind dialogs and the pause overlay
pub const SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.55);

/// Clear color behind the map
pub const BACKDROP: Color = Color::new(0.4, 0.27, 0.27, 1.0); // ~#664444

// =============================================================================
// Text
// =============================================================================

pub const TEXT_COLOR: Color = Color::new(0.93, 0.92, 0.88, 1.0);

pub const TEXT_DIM: Color = Color::new(0.6, 0.6, 0.58, 1.0);

/// Title when the round was won
pub const TEXT_WIN: Color = Color::new(0.95, 0.8, 0.35, 1.0);

/// Title when time ran out, and the clock in its last seconds
pub const TEXT_ALERT: Color = Color::new(0.95, 0.38, 0.32, 1.0);

// =============================================================================
// Score icons
// =============================================================================

/// Icon tint before the stag is found
pub const ICON_HIDDEN: Color = Color::new(0.25, 0.25, 0.25, 0.8);

/// Ring around a found icon
pub const ICON_FOUND_RING: Color = Color::new(0.45, 0.85, 0.4, 1.0);

/// Tint for found stags without a dedicated texture
pub const FOUND_TINT: Color = Color::new(0.6, 1.0, 0.6, 1.0);

/// Placeholder fill for missing textures
pub const PLACEHOLDER: Color = Color::new(0.55, 0.35, 0.2, 0.9);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_CLOCK: f32 = 36.0;

pub const FONT_SIZE_TITLE: f32 = 44.0;

pub const FONT_SIZE_CONTENT: f32 = 24.0;

pub const FONT_SIZE_SMALL: f32 = 16.0;

/// The clock turns red at or below this many seconds
pub const LOW_TIME_SECS: u32 = 10;

// =============================================================================
// Map placeholders
// =============================================================================

/// Map fill when the map image is missing
pub const MAP_PLACEHOLDER: Color = Color::new(0.28, 0.38, 0.24, 1.0);

/// Grid drawn over the placeholder map
pub const MAP_GRID: Color = Color::new(0.35, 0.46, 0.3, 1.0);

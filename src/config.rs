//! Round configuration
//!
//! A round is described by a RON file (`assets/hunt.ron`): the map image,
//! the hidden targets, the time limit and the camera limits. The same file is
//! compiled into the binary so the game still starts when it can't be fetched.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the round file, relative to the working directory
/// (native) or the page (wasm)
pub const CONFIG_PATH: &str = "assets/hunt.ron";

/// Built-in copy of the round file
const EMBEDDED_CONFIG: &str = include_str!("../assets/hunt.ron");

/// Validation limits to keep a broken round file from producing a broken game
pub mod limits {
    /// Maximum number of hidden targets
    pub const MAX_TARGETS: usize = 32;
    /// Maximum length of names and asset paths
    pub const MAX_STRING_LEN: usize = 256;
    /// Maximum world coordinate
    pub const MAX_COORD: f32 = 100_000.0;
    /// Maximum time limit (one hour)
    pub const MAX_TIME_LIMIT_SECS: u32 = 3600;
    /// Maximum extra cycles of the found-target pulse
    pub const MAX_PULSE_REPEATS: u32 = 16;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Camera zoom limits and step sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub initial_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom change per wheel notch
    pub wheel_step: f32,
    /// Zoom change per keyboard press
    #[serde(default = "default_key_step")]
    pub key_step: f32,
}

fn default_key_step() -> f32 {
    0.1
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_zoom: 0.5,
            min_zoom: 0.5,
            max_zoom: 2.0,
            wheel_step: 0.1,
            key_step: default_key_step(),
        }
    }
}

/// Found-target animation: grow to `scale` and back, `1 + repeats` times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    pub scale: f32,
    pub half_period_secs: f32,
    pub repeats: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            scale: 1.2,
            half_period_secs: 0.2,
            repeats: 1,
        }
    }
}

/// One hidden target on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDef {
    pub name: String,
    pub texture: String,
    #[serde(default)]
    pub found_texture: Option<String>,
    /// World-space center
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// A complete round definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntConfig {
    pub map: String,
    /// Overrides the decoded map image size
    #[serde(default)]
    pub map_size: Option<(f32, f32)>,
    pub time_limit_secs: u32,
    /// Logical canvas width the zoom values refer to
    pub design_width: f32,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub pulse: PulseConfig,
    pub targets: Vec<TargetDef>,
}

impl HuntConfig {
    /// Parse and validate a round from RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: HuntConfig = ron::from_str(s)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Read a round file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// The round compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_ron_str(EMBEDDED_CONFIG)
    }

    /// Serialize back to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("    ".to_string());
        ron::ser::to_string_pretty(self, config)
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_string(&self.map, "map")?;
        if let Some((w, h)) = self.map_size {
            if !is_valid_extent(w) || !is_valid_extent(h) {
                return Err(format!("map_size: invalid size {} x {}", w, h));
            }
        }

        if self.time_limit_secs == 0 || self.time_limit_secs > limits::MAX_TIME_LIMIT_SECS {
            return Err(format!(
                "time_limit_secs: {} not in 1..={}",
                self.time_limit_secs,
                limits::MAX_TIME_LIMIT_SECS
            ));
        }
        if !is_valid_extent(self.design_width) {
            return Err(format!("design_width: invalid value {}", self.design_width));
        }

        validate_camera(&self.camera)?;
        validate_pulse(&self.pulse)?;

        if self.targets.is_empty() {
            return Err("targets: round has no targets".to_string());
        }
        if self.targets.len() > limits::MAX_TARGETS {
            return Err(format!(
                "targets: too many targets ({} > {})",
                self.targets.len(),
                limits::MAX_TARGETS
            ));
        }
        for (i, target) in self.targets.iter().enumerate() {
            validate_target(target, &format!("targets[{}]", i))?;
        }

        Ok(())
    }
}

/// Load the round through macroquad's file API (works in the browser).
/// Falls back to the embedded round if the file is missing or invalid.
pub async fn load_config(path: &str) -> HuntConfig {
    use macroquad::logging::{info, warn};

    let loaded = match macroquad::prelude::load_string(path).await {
        Ok(text) => HuntConfig::from_ron_str(&text),
        Err(e) => {
            warn!("Failed to read {}: {}", path, e);
            HuntConfig::embedded()
        }
    };

    match loaded {
        Ok(config) => {
            info!("Loaded round with {} targets", config.targets.len());
            config
        }
        Err(e) => {
            warn!("Invalid round file {}: {}, using built-in round", path, e);
            // The embedded round is covered by tests
            HuntConfig::embedded().unwrap_or_else(|_| fallback_round())
        }
    }
}

/// Last-resort single target round, used only if the embedded file is broken
fn fallback_round() -> HuntConfig {
    HuntConfig {
        map: "assets/Map3k.jpg".to_string(),
        map_size: None,
        time_limit_secs: 45,
        design_width: 1920.0,
        camera: CameraConfig::default(),
        pulse: PulseConfig::default(),
        targets: vec![TargetDef {
            name: "Stag".to_string(),
            texture: "assets/Stag1.png".to_string(),
            found_texture: None,
            x: 1500.0,
            y: 1000.0,
            scale: 0.3,
        }],
    }
}

fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn is_valid_extent(f: f32) -> bool {
    is_valid_coord(f) && f > 0.0
}

fn validate_string(s: &str, context: &str) -> Result<(), String> {
    if s.len() > limits::MAX_STRING_LEN {
        return Err(format!("{}: string too long ({} > {})",
            context, s.len(), limits::MAX_STRING_LEN));
    }
    Ok(())
}

fn validate_camera(camera: &CameraConfig) -> Result<(), String> {
    let CameraConfig { initial_zoom, min_zoom, max_zoom, wheel_step, key_step } = *camera;
    for (name, value) in [
        ("min_zoom", min_zoom),
        ("max_zoom", max_zoom),
        ("initial_zoom", initial_zoom),
        ("wheel_step", wheel_step),
        ("key_step", key_step),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("camera.{}: must be positive, got {}", name, value));
        }
    }
    if min_zoom > max_zoom {
        return Err(format!("camera: min_zoom {} > max_zoom {}", min_zoom, max_zoom));
    }
    if initial_zoom < min_zoom || initial_zoom > max_zoom {
        return Err(format!("camera.initial_zoom: {} outside {}..={}",
            initial_zoom, min_zoom, max_zoom));
    }
    Ok(())
}

fn validate_pulse(pulse: &PulseConfig) -> Result<(), String> {
    if !pulse.scale.is_finite() || pulse.scale <= 0.0 {
        return Err(format!("pulse.scale: must be positive, got {}", pulse.scale));
    }
    if !pulse.half_period_secs.is_finite() || pulse.half_period_secs < 0.0 {
        return Err(format!("pulse.half_period_secs: invalid value {}", pulse.half_period_secs));
    }
    if pulse.repeats > limits::MAX_PULSE_REPEATS {
        return Err(format!(
            "pulse.repeats: {} exceeds {}",
            pulse.repeats,
            limits::MAX_PULSE_REPEATS
        ));
    }
    Ok(())
}

fn validate_target(target: &TargetDef, context: &str) -> Result<(), String> {
    validate_string(&target.name, &format!("{} name", context))?;
    validate_string(&target.texture, &format!("{} texture", context))?;
    if let Some(found) = &target.found_texture {
        validate_string(found, &format!("{} found_texture", context))?;
    }
    if !is_valid_coord(target.x) || !is_valid_coord(target.y) {
        return Err(format!("{}: invalid position ({}, {})", context, target.x, target.y));
    }
    if !is_valid_extent(target.scale) {
        return Err(format!("{}: invalid scale {}", context, target.scale));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_round_is_valid() {
        let config = HuntConfig::embedded().unwrap();
        assert_eq!(config.targets.len(), 5);
        assert_eq!(config.time_limit_secs, 45);
        assert!((config.camera.min_zoom - 0.5).abs() < 0.001);
        assert!((config.camera.max_zoom - 2.0).abs() < 0.001);
        assert!((config.targets[0].x - 2742.0).abs() < 0.001);
        assert!((config.targets[3].scale - 0.29).abs() < 0.001);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let src = r#"(
            map: "map.jpg",
            time_limit_secs: 30,
            design_width: 1280.0,
            targets: [(name: "A", texture: "a.png", x: 10.0, y: 20.0, scale: 1.0)],
        )"#;
        let config = HuntConfig::from_ron_str(src).unwrap();
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.pulse, PulseConfig::default());
        assert!(config.map_size.is_none());
        assert!(config.targets[0].found_texture.is_none());
    }

    #[test]
    fn test_rejects_empty_targets() {
        let mut config = HuntConfig::embedded().unwrap();
        config.targets.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_zoom_range() {
        let mut config = HuntConfig::embedded().unwrap();
        config.camera.min_zoom = 3.0;
        assert!(config.validate().is_err());

        let mut config = HuntConfig::embedded().unwrap();
        config.camera.initial_zoom = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_target() {
        let mut config = HuntConfig::embedded().unwrap();
        config.targets[2].x = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.contains("targets[2]"));
    }

    #[test]
    fn test_rejects_huge_repeats() {
        let mut config = HuntConfig::embedded().unwrap();
        config.pulse.repeats = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.contains("pulse.repeats"));

        // Also rejected when it arrives through a round file
        let text = config.to_ron_string().unwrap();
        assert!(matches!(
            HuntConfig::from_ron_str(&text),
            Err(ConfigError::ValidationError(_))
        ));

        config.pulse.repeats = limits::MAX_PULSE_REPEATS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_time_limit() {
        let mut config = HuntConfig::embedded().unwrap();
        config.time_limit_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        match HuntConfig::from_ron_str("(map: ") {
            Err(ConfigError::ParseError(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let config = HuntConfig::embedded().unwrap();
        let text = config.to_ron_string().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = HuntConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HuntConfig::load(dir.path().join("nope.ron"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}

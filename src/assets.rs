//! Texture loading
//!
//! macroquad's own loader only understands PNG, so images are fetched with
//! `load_file` (works in the browser) and decoded with the `image` crate.
//! A texture that fails to load is logged and left out; the renderer draws a
//! placeholder in its place.

use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use crate::config::HuntConfig;
use crate::hunt::FALLBACK_TARGET_SIZE;

/// Map size used when neither the config nor the image provides one
pub const FALLBACK_MAP_SIZE: Vec2 = vec2(3000.0, 2000.0);

#[derive(Debug)]
pub enum AssetError {
    /// Fetching the file failed
    Load(String),
    /// The bytes are not a supported image
    Decode(String),
    /// Larger than a texture can address
    TooLarge { width: u32, height: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load(e) => write!(f, "load failed: {}", e),
            AssetError::Decode(e) => write!(f, "decode failed: {}", e),
            AssetError::TooLarge { width, height } => {
                write!(f, "image too large: {} x {}", width, height)
            }
        }
    }
}

impl std::error::Error for AssetError {}

#[derive(Default)]
pub struct TargetTextures {
    pub base: Option<Texture2D>,
    pub found: Option<Texture2D>,
}

#[derive(Default)]
pub struct GameTextures {
    pub map: Option<Texture2D>,
    pub targets: Vec<TargetTextures>,
}

impl GameTextures {
    /// No textures at all; everything draws as placeholders
    pub fn empty(target_count: usize) -> Self {
        Self {
            map: None,
            targets: (0..target_count).map(|_| TargetTextures::default()).collect(),
        }
    }

    /// Load the map and every target texture the round names
    pub async fn load(config: &HuntConfig) -> Self {
        let map = load_optional(&config.map).await;

        let mut targets = Vec::with_capacity(config.targets.len());
        for def in &config.targets {
            let base = load_optional(&def.texture).await;
            let found = match &def.found_texture {
                Some(path) => load_optional(path).await,
                None => None,
            };
            targets.push(TargetTextures { base, found });
        }

        let loaded = targets.iter().filter(|t| t.base.is_some()).count();
        info!("Loaded {}/{} target textures", loaded, targets.len());

        Self { map, targets }
    }

    /// Map size: config override, then image size, then the fallback
    pub fn map_size(&self, config: &HuntConfig) -> Vec2 {
        if let Some((w, h)) = config.map_size {
            return vec2(w, h);
        }
        self.map.as_ref().map(|t| t.size()).unwrap_or(FALLBACK_MAP_SIZE)
    }

    /// Unscaled size of each target, used for hit testing
    pub fn target_sizes(&self) -> Vec<Vec2> {
        self.targets
            .iter()
            .map(|t| t.base.as_ref().map(|tex| tex.size()).unwrap_or(FALLBACK_TARGET_SIZE))
            .collect()
    }
}

async fn load_optional(path: &str) -> Option<Texture2D> {
    match load_image_texture(path).await {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("Failed to load {}: {}", path, e);
            None
        }
    }
}

/// Fetch and decode an image (PNG or JPEG) into a texture
pub async fn load_image_texture(path: &str) -> Result<Texture2D, AssetError> {
    let bytes = load_file(path)
        .await
        .map_err(|e| AssetError::Load(e.to_string()))?;
    let (width, height, rgba) = decode_rgba(&bytes)?;

    let texture = Texture2D::from_rgba8(width, height, &rgba);
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

/// Decode image bytes to RGBA8, checking the size fits a texture
pub fn decode_rgba(bytes: &[u8]) -> Result<(u16, u16, Vec<u8>), AssetError> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let too_large = || AssetError::TooLarge { width, height };
    let w = u16::try_from(width).map_err(|_| too_large())?;
    let h = u16::try_from(height).map_err(|_| too_large())?;
    Ok((w, h, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color: [u8; 3], format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode(4, 3, [10, 20, 30], ImageFormat::Png);

        let (w, h, rgba) = decode_rgba(&bytes).unwrap();
        assert_eq!((w, h), (4, 3));
        assert_eq!(rgba.len(), 4 * 3 * 4);
        assert_eq!(&rgba[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = encode(8, 8, [200, 100, 50], ImageFormat::Jpeg);

        let (w, h, rgba) = decode_rgba(&bytes).unwrap();
        assert_eq!((w, h), (8, 8));
        assert_eq!(rgba.len(), 8 * 8 * 4);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_rgba(b"not an image"), Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_map_size_override() {
        let mut config = HuntConfig::embedded().unwrap();
        let textures = GameTextures::empty(config.targets.len());
        assert_eq!(textures.map_size(&config), FALLBACK_MAP_SIZE);

        config.map_size = Some((1234.0, 567.0));
        assert_eq!(textures.map_size(&config), vec2(1234.0, 567.0));
        assert_eq!(textures.target_sizes(), vec![FALLBACK_TARGET_SIZE; 5]);
    }
}

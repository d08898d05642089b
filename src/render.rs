//! Map and target drawing
//!
//! Everything is drawn in screen space by projecting world rectangles through
//! the camera, so no engine camera state is involved.

use macroquad::prelude::*;
use crate::assets::GameTextures;
use crate::camera::MapCamera;
use crate::hud::theme::{FOUND_TINT, MAP_GRID, MAP_PLACEHOLDER, PLACEHOLDER};
use crate::hunt::{HiddenTarget, HuntSession};

/// Grid spacing of the placeholder map, in world units
const GRID_STEP: f32 = 250.0;

pub fn draw_scene(camera: &MapCamera, session: &HuntSession, textures: &GameTextures) {
    draw_map(camera, textures);

    let view = camera.visible_world_rect();
    for target in session.targets() {
        let rect = target.display_rect();
        if view.overlaps(&rect) {
            draw_target(camera, target, rect, textures);
        }
    }
}

/// Project a world rectangle to the screen
pub fn world_rect_to_screen(camera: &MapCamera, rect: Rect) -> Rect {
    let origin = camera.world_to_screen(rect.point());
    let size = rect.size() * camera.pixels_per_unit();
    Rect::new(origin.x, origin.y, size.x, size.y)
}

fn draw_map(camera: &MapCamera, textures: &GameTextures) {
    let map = camera.map_size();
    let screen = world_rect_to_screen(camera, Rect::new(0.0, 0.0, map.x, map.y));

    let Some(texture) = &textures.map else {
        draw_rectangle(screen.x, screen.y, screen.w, screen.h, MAP_PLACEHOLDER);
        let step = GRID_STEP * camera.pixels_per_unit();
        let mut x = screen.x + step;
        while x < screen.x + screen.w {
            draw_line(x, screen.y, x, screen.y + screen.h, 1.0, MAP_GRID);
            x += step;
        }
        let mut y = screen.y + step;
        while y < screen.y + screen.h {
            draw_line(screen.x, y, screen.x + screen.w, y, 1.0, MAP_GRID);
            y += step;
        }
        return;
    };

    draw_texture_ex(
        texture,
        screen.x,
        screen.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(screen.size()),
            ..Default::default()
        },
    );
}

fn draw_target(camera: &MapCamera, target: &HiddenTarget, rect: Rect, textures: &GameTextures) {
    let screen = world_rect_to_screen(camera, rect);
    let set = textures.targets.get(target.index);

    let (texture, tint) = match set {
        Some(set) if target.is_found() && set.found.is_some() => (set.found.as_ref(), WHITE),
        Some(set) if target.is_found() => (set.base.as_ref(), FOUND_TINT),
        Some(set) => (set.base.as_ref(), WHITE),
        None => (None, WHITE),
    };

    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            screen.x,
            screen.y,
            tint,
            DrawTextureParams {
                dest_size: Some(screen.size()),
                ..Default::default()
            },
        ),
        None => {
            let color = if target.is_found() { FOUND_TINT } else { PLACEHOLDER };
            draw_rectangle(screen.x, screen.y, screen.w, screen.h, color);
        }
    }
}

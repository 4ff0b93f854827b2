//! Drawing geometry and colors, independent of any canvas
//!
//! Everything here is a pure function of the simulation snapshot so it can be
//! unit tested headless; the wasm-only code in `mod.rs` just replays it onto
//! a 2D context.

use glam::Vec2;

use crate::sim::Rect;

/// Background fill
pub const BG_COLOR: &str = "#12101e";
/// Retro grid lines
pub const GRID_COLOR: &str = "rgba(156, 146, 172, 0.1)";
/// Ship at normal speed
pub const PLAYER_COLOR: &str = "#db2777";
/// Ship while slowing time
pub const PLAYER_SLOW_COLOR: &str = "#06b6d4";
/// Vignette edge while slowing time
pub const VIGNETTE_COLOR: &str = "rgba(6, 182, 212, 0.3)";
/// Grid cell size in pixels
pub const GRID_SIZE: f32 = 40.0;

/// CSS color for an obstacle hue
pub fn obstacle_color(hue: f32) -> String {
    format!("hsl({}, 70%, 50%)", hue)
}

/// Ship fill color for the current slow state
pub fn player_color(slowing: bool) -> &'static str {
    if slowing { PLAYER_SLOW_COLOR } else { PLAYER_COLOR }
}

/// Vertical scroll offset of the grid. The grid rides the world speed so the
/// background appears to fall with the obstacles.
pub fn grid_offset(tick_count: u64, effective_speed: f32) -> f32 {
    (tick_count as f32 * effective_speed) % GRID_SIZE
}

/// Ship silhouette: a notched triangle pointing up, in surface coordinates.
/// Wound clockwise starting at the nose.
pub fn ship_outline(player: &Rect) -> [Vec2; 4] {
    let c = player.center();
    let half_w = player.size.x / 2.0;
    let half_h = player.size.y / 2.0;
    [
        Vec2::new(c.x, c.y - half_h),
        Vec2::new(c.x + half_w, c.y + half_h),
        Vec2::new(c.x, c.y + player.size.y / 3.0),
        Vec2::new(c.x - half_w, c.y + half_h),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_color_format() {
        assert_eq!(obstacle_color(120.0), "hsl(120, 70%, 50%)");
        assert_eq!(obstacle_color(0.0), "hsl(0, 70%, 50%)");
    }

    #[test]
    fn test_player_color_tracks_slow_state() {
        assert_eq!(player_color(false), PLAYER_COLOR);
        assert_eq!(player_color(true), PLAYER_SLOW_COLOR);
    }

    #[test]
    fn test_grid_offset_wraps() {
        assert_eq!(grid_offset(0, 4.0), 0.0);
        assert_eq!(grid_offset(5, 4.0), 20.0);
        // 11 ticks * 4 px = 44 px, one full cell plus 4
        assert_eq!(grid_offset(11, 4.0), 4.0);
    }

    #[test]
    fn test_ship_outline_stays_inside_box() {
        let player = Rect::new(280.0, 740.0, 40.0, 40.0);
        for p in ship_outline(&player) {
            assert!(p.x >= player.pos.x && p.x <= player.right());
            assert!(p.y >= player.pos.y && p.y <= player.bottom());
        }
    }

    #[test]
    fn test_ship_nose_is_top_center() {
        let player = Rect::new(0.0, 0.0, 40.0, 40.0);
        let outline = ship_outline(&player);
        assert_eq!(outline[0], Vec2::new(20.0, 0.0));
    }
}

//! Game state and core simulation types
//!
//! One `GameState` per run. It is created by `engine::GameEngine::start`,
//! mutated only inside `tick`, and discarded when the run ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::battery::BatteryState;
use crate::consts::*;

/// Axis-aligned rectangle, origin at top-left (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// A falling obstacle. The hue is display-only; it carries no gameplay
/// semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Degrees in [0, 360)
    pub hue: f32,
}

/// Latched input flags, written by `InputLatch` between ticks and read-only
/// inside the tick function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub slow_requested: bool,
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Rendering surface bounds; updated by resize before the next tick
    pub surface_width: f32,
    pub surface_height: f32,
    /// Player ship rectangle; `pos.x` stays in `[0, surface_width - width]`
    pub player: Rect,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Logical ticks since start, incremented once per tick
    pub tick_count: u64,
    /// Non-decreasing; steps by `SCORE_PER_OBSTACLE` only
    pub score: u32,
    /// World scroll speed before the slow multiplier; derived from score
    pub base_speed: f32,
    /// Chrono battery
    pub battery: BatteryState,
    /// Latched inputs for the current tick
    pub inputs: InputFlags,
    /// False is terminal; a dead state is never ticked again
    pub alive: bool,
}

impl GameState {
    /// Create a fresh run with the player centered at the bottom of the
    /// surface. Degenerate bounds get the same floors as `resize`, so the
    /// clamp inside the tick always has a valid range.
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        let surface_width = surface_width.max(PLAYER_WIDTH);
        let surface_height = surface_height.max(PLAYER_HEIGHT + PLAYER_BOTTOM_MARGIN);
        Self {
            surface_width,
            surface_height,
            player: Rect::new(
                surface_width / 2.0 - PLAYER_WIDTH / 2.0,
                surface_height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            obstacles: Vec::new(),
            tick_count: 0,
            score: 0,
            base_speed: GAME_SPEED_BASE,
            battery: BatteryState::default(),
            inputs: InputFlags::default(),
            alive: true,
        }
    }

    /// Apply new surface bounds. A boundary clamp, not a reset: obstacles keep
    /// falling, the player is pulled back inside the new bounds and re-pinned
    /// to the bottom edge.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface_width = width.max(PLAYER_WIDTH);
        self.surface_height = height.max(PLAYER_HEIGHT + PLAYER_BOTTOM_MARGIN);
        self.player.pos.y = self.surface_height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN;
        self.player.pos.x = self
            .player
            .pos
            .x
            .clamp(0.0, self.surface_width - PLAYER_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_player() {
        let state = GameState::new(600.0, 800.0);
        assert_eq!(state.player.pos.x, 280.0);
        assert_eq!(state.player.pos.y, 740.0);
        assert!(state.alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.battery.charge, BATTERY_MAX);
    }

    #[test]
    fn test_resize_clamps_player() {
        let mut state = GameState::new(600.0, 800.0);
        state.player.pos.x = 550.0;
        state.resize(400.0, 500.0);
        assert_eq!(state.player.pos.x, 360.0); // 400 - 40
        assert_eq!(state.player.pos.y, 440.0); // 500 - 40 - 20
    }

    #[test]
    fn test_new_floors_degenerate_bounds() {
        let state = GameState::new(10.0, 0.0);
        assert_eq!(state.surface_width, PLAYER_WIDTH);
        assert_eq!(state.surface_height, PLAYER_HEIGHT + PLAYER_BOTTOM_MARGIN);
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.pos.y, 0.0);
    }

    #[test]
    fn test_resize_ignores_degenerate_bounds() {
        let mut state = GameState::new(600.0, 800.0);
        state.resize(-50.0, 0.0);
        assert!(state.surface_width >= PLAYER_WIDTH);
        assert!(state.player.pos.x >= 0.0);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}

//! Chrono Dodge - a time-bending falling-block dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tick update, collisions, battery, difficulty)
//! - `engine`: Fixed-timestep run lifecycle driving the simulation
//! - `input`: Per-key latching of movement and time-slow intent
//! - `render`: Canvas2D presentation (reads snapshots, never mutates)
//! - `scores`: Leaderboard boundary (validation, storage, wire types)

pub mod engine;
pub mod input;
pub mod render;
pub mod scores;
pub mod sim;

pub use engine::GameEngine;
pub use input::{Action, InputLatch};

/// Game configuration constants
pub mod consts {
    /// Fixed logical tick rate. The original game ran one update per rendered
    /// frame; the accumulator in `engine` pins the logic to this rate instead
    /// so difficulty progression is independent of display refresh.
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Player ship bounding box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Gap between the ship and the bottom edge of the surface
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    /// Horizontal ship speed, pixels per tick
    pub const PLAYER_SPEED: f32 = 7.0;

    /// Obstacle bounding box
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;

    /// World scroll speed at score 0, pixels per tick
    pub const GAME_SPEED_BASE: f32 = 4.0;
    /// Ticks between spawns at score 0
    pub const SPAWN_RATE_BASE: u32 = 60;
    /// Spawn interval floor
    pub const SPAWN_RATE_MIN: u32 = 20;
    /// Score needed per difficulty step
    pub const DIFFICULTY_STEP: u32 = 500;
    /// Base speed gain per difficulty step
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Points per obstacle that clears the bottom edge
    pub const SCORE_PER_OBSTACLE: u32 = 10;

    /// Chrono battery bounds and rates, per tick
    pub const BATTERY_MAX: f32 = 100.0;
    pub const BATTERY_DRAIN: f32 = 1.5;
    pub const BATTERY_RECHARGE: f32 = 0.5;
    /// World speed multiplier while slowing time
    pub const TIME_SLOW_FACTOR: f32 = 0.3;
}

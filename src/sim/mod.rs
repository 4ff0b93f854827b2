//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical ticks only, no wall-clock reads
//! - Randomness only through the injected `SpawnRng`
//! - Stable obstacle order (spawn order)
//! - No rendering or platform dependencies

pub mod battery;
pub mod collision;
pub mod difficulty;
pub mod rng;
pub mod state;
pub mod tick;

pub use battery::BatteryState;
pub use collision::overlaps;
pub use difficulty::{base_speed, spawn_interval};
pub use rng::{PcgSpawnRng, SequenceRng, SpawnRng};
pub use state::{GameState, InputFlags, Obstacle, Rect};
pub use tick::{TickEvent, tick};

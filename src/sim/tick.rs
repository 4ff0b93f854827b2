//! Fixed timestep simulation tick
//!
//! The single mutator of `GameState`. Phase order inside a tick is load
//! bearing: collisions are resolved before off-screen scoring, so an obstacle
//! that hits the ship on the tick it would have left the screen never scores.

use super::collision::overlaps;
use super::difficulty;
use super::rng::SpawnRng;
use super::state::{GameState, Obstacle, Rect};
use crate::consts::*;

/// Terminal event produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// First collision of the run. Carries the final score; the state is
    /// frozen at the moment of impact.
    GameOver { score: u32 },
}

/// Advance the simulation by exactly one logical tick.
///
/// A dead state is a no-op; the caller never has to guard.
pub fn tick(state: &mut GameState, rng: &mut dyn SpawnRng) -> Option<TickEvent> {
    if !state.alive {
        return None;
    }

    // Battery first: this tick's effective speed depends on it
    state.battery.update(state.inputs.slow_requested);
    let effective_speed = state.base_speed * state.battery.speed_multiplier();

    // Player movement. Ship speed is not scaled by time-slow; both keys held
    // cancel out. Clamp to the surface regardless of input.
    if state.inputs.left {
        state.player.pos.x -= PLAYER_SPEED;
    }
    if state.inputs.right {
        state.player.pos.x += PLAYER_SPEED;
    }
    state.player.pos.x = state
        .player
        .pos
        .x
        .clamp(0.0, state.surface_width - PLAYER_WIDTH);

    // Spawn check uses the post-increment counter, so tick 0 never spawns
    state.tick_count += 1;
    let interval = difficulty::spawn_interval(state.score) as u64;
    if state.tick_count % interval == 0 {
        let x = rng.next_unit() * (state.surface_width - OBSTACLE_WIDTH);
        let hue = rng.next_unit() * 360.0;
        state.obstacles.push(Obstacle {
            rect: Rect::new(x, -OBSTACLE_HEIGHT, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            hue,
        });
    }

    // Gravity: everything falls by the same effective speed
    for obstacle in &mut state.obstacles {
        obstacle.rect.pos.y += effective_speed;
    }

    // Collision scan in spawn order; the first hit ends the run and freezes
    // the state before any off-screen scoring happens
    for obstacle in &state.obstacles {
        if overlaps(&state.player, &obstacle.rect) {
            state.alive = false;
            return Some(TickEvent::GameOver { score: state.score });
        }
    }

    // Score obstacles whose top edge passed the bottom bound, then rederive
    // the base speed from the new total
    let bottom = state.surface_height;
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.rect.pos.y <= bottom);
    let cleared = (before - state.obstacles.len()) as u32;
    state.score += cleared * SCORE_PER_OBSTACLE;
    state.base_speed = difficulty::base_speed(state.score);

    None
}

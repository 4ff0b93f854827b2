//! Run lifecycle and fixed-timestep scheduling
//!
//! `GameEngine` owns the `GameState` for the active run and is the only thing
//! that ticks it. Frames hand in wall-clock deltas; an accumulator converts
//! them into whole logical ticks at `TICK_HZ`, so difficulty and scoring stay
//! a pure function of tick count on any display refresh rate. Input handlers
//! write to the latch, never to the state; the latch is sampled once per tick.

use crate::consts::*;
use crate::input::{Action, InputLatch};
use crate::sim::rng::{PcgSpawnRng, SpawnRng};
use crate::sim::tick::{TickEvent, tick};
use crate::sim::GameState;

/// Terminal run outcome, delivered exactly once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
}

pub struct GameEngine {
    state: Option<GameState>,
    rng: Box<dyn SpawnRng>,
    latch: InputLatch,
    accumulator: f32,
}

impl GameEngine {
    /// Engine with the production RNG
    pub fn new(seed: u64) -> Self {
        log::info!("engine created with seed {seed}");
        Self::with_rng(Box::new(PcgSpawnRng::new(seed)))
    }

    /// Engine with an injected spawn source (tests, replays)
    pub fn with_rng(rng: Box<dyn SpawnRng>) -> Self {
        Self {
            state: None,
            rng,
            latch: InputLatch::new(),
            accumulator: 0.0,
        }
    }

    /// Begin a fresh run on a surface of the given size. Any previous run's
    /// state is discarded, never reused.
    pub fn start(&mut self, width: f32, height: f32) {
        self.state = Some(GameState::new(width, height));
        self.accumulator = 0.0;
        self.latch.clear();
        log::info!("run started on {width}x{height}");
    }

    /// Replace the spawn source for the next run
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Box::new(PcgSpawnRng::new(seed));
    }

    /// True while a run is in progress
    pub fn running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.alive)
    }

    /// Post-tick snapshot for the renderer
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Route a raw keyboard event into the latch. Returns true for bound keys.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        self.latch.key_event(code, pressed)
    }

    /// Host-level input without a physical key (touch buttons, tests)
    pub fn set_input(&mut self, action: Action, pressed: bool) {
        if pressed {
            self.latch.press(action, "host");
        } else {
            self.latch.release(action, "host");
        }
    }

    /// Apply new surface bounds before the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(state) = self.state.as_mut() {
            state.resize(width, height);
        }
    }

    /// End the run without an event. Idempotent; no further ticks apply.
    pub fn stop(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if state.alive {
                state.alive = false;
                log::info!("run stopped at tick {}", state.tick_count);
            }
        }
        self.latch.clear();
    }

    /// Advance by one rendered frame's worth of wall time.
    ///
    /// Runs zero or more fixed ticks, capped at `MAX_TICKS_PER_FRAME` so a
    /// background tab does not spiral on resume. Negative deltas are clamped
    /// silently. Returns the terminal event on the frame the run ends, once.
    pub fn frame(&mut self, dt: f32) -> Option<GameOver> {
        let Some(state) = self.state.as_mut() else {
            return None;
        };
        if !state.alive {
            return None;
        }

        // A stalled tab hands in seconds of dt at once; cap the catch-up at
        // the substep budget instead of replaying the whole stall.
        self.accumulator += dt.clamp(0.0, MAX_TICKS_PER_FRAME as f32 * SIM_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= SIM_DT;
            ticks += 1;
            state.inputs = self.latch.flags();
            // The dead-state guard above makes this unreachable on later
            // frames, so the event fires exactly once per run
            if let Some(TickEvent::GameOver { score }) = tick(state, self.rng.as_mut()) {
                self.accumulator = 0.0;
                log::info!("game over at tick {} with score {score}", state.tick_count);
                return Some(GameOver { score });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRng;
    use crate::sim::{Obstacle, Rect};

    fn test_engine() -> GameEngine {
        GameEngine::with_rng(Box::new(SequenceRng::new(vec![0.5, 0.2])))
    }

    #[test]
    fn test_accumulator_runs_whole_ticks() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);

        engine.frame(SIM_DT * 3.5);
        assert_eq!(engine.state().unwrap().tick_count, 3);

        // The leftover half tick completes on the next frame
        engine.frame(SIM_DT * 0.5);
        assert_eq!(engine.state().unwrap().tick_count, 4);
    }

    #[test]
    fn test_huge_frame_is_capped() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.frame(10.0);
        assert_eq!(
            engine.state().unwrap().tick_count,
            u64::from(MAX_TICKS_PER_FRAME)
        );
    }

    #[test]
    fn test_negative_dt_clamps_silently() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.frame(-1.0);
        assert_eq!(engine.state().unwrap().tick_count, 0);
    }

    #[test]
    fn test_game_over_fires_exactly_once() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        // Plant a colliding obstacle directly on the ship
        engine
            .state
            .as_mut()
            .unwrap()
            .obstacles
            .push(Obstacle {
                rect: Rect::new(280.0, 750.0, 30.0, 30.0),
                hue: 0.0,
            });

        let first = engine.frame(SIM_DT);
        assert_eq!(first, Some(GameOver { score: 0 }));
        assert!(!engine.running());

        let ticks = engine.state().unwrap().tick_count;
        for _ in 0..5 {
            assert_eq!(engine.frame(SIM_DT), None);
        }
        assert_eq!(engine.state().unwrap().tick_count, ticks);
    }

    #[test]
    fn test_stop_is_idempotent_and_terminal() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.frame(SIM_DT);
        engine.stop();
        engine.stop();
        assert!(!engine.running());

        let ticks = engine.state().unwrap().tick_count;
        assert_eq!(engine.frame(SIM_DT * 4.0), None);
        assert_eq!(engine.state().unwrap().tick_count, ticks);
    }

    #[test]
    fn test_restart_discards_old_run() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.set_input(Action::MoveLeft, true);
        engine.frame(SIM_DT * 5.0);
        engine.stop();

        engine.start(600.0, 800.0);
        let state = engine.state().unwrap();
        assert!(state.alive);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.player.pos.x, 280.0);
        // Held inputs from the previous run were dropped
        assert!(!state.inputs.left);
    }

    #[test]
    fn test_host_input_moves_player() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.set_input(Action::MoveRight, true);
        engine.frame(SIM_DT);
        assert_eq!(engine.state().unwrap().player.pos.x, 287.0);
        engine.set_input(Action::MoveRight, false);
        engine.frame(SIM_DT);
        assert_eq!(engine.state().unwrap().player.pos.x, 287.0);
    }

    #[test]
    fn test_resize_applies_before_next_tick() {
        let mut engine = test_engine();
        engine.start(600.0, 800.0);
        engine.resize(300.0, 400.0);
        let state = engine.state().unwrap();
        assert!(state.player.pos.x <= 300.0 - 40.0);
        assert_eq!(state.player.pos.y, 340.0);
    }
}

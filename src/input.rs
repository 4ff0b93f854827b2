//! Input latching
//!
//! Converts key down/up events into held flags for the tick function. Each
//! logical action tracks the set of physical key codes currently pressed, and
//! the flag is that set's non-emptiness. With two bindings per direction
//! (arrow keys and WASD) a plain boolean latch goes sticky: press ArrowLeft
//! and KeyA together, release one, and a boolean stays stuck on. Per-source
//! tracking releases correctly whichever key goes up first.

use crate::sim::InputFlags;

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SlowTime,
}

/// Map a DOM `KeyboardEvent.code` to its logical action
pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Action::MoveLeft),
        "ArrowRight" | "KeyD" => Some(Action::MoveRight),
        "Space" => Some(Action::SlowTime),
        _ => None,
    }
}

/// Held-key state, written by event handlers and read by the engine between
/// ticks. Never touches `GameState` directly.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    left: Vec<String>,
    right: Vec<String>,
    slow: Vec<String>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn sources_mut(&mut self, action: Action) -> &mut Vec<String> {
        match action {
            Action::MoveLeft => &mut self.left,
            Action::MoveRight => &mut self.right,
            Action::SlowTime => &mut self.slow,
        }
    }

    /// Record a press from one physical source. Key repeat sends duplicate
    /// downs; the source is only tracked once.
    pub fn press(&mut self, action: Action, source: &str) {
        let sources = self.sources_mut(action);
        if !sources.iter().any(|s| s == source) {
            sources.push(source.to_owned());
        }
    }

    /// Record a release from one physical source. The latch stays held while
    /// any other source for the same action is still down.
    pub fn release(&mut self, action: Action, source: &str) {
        self.sources_mut(action).retain(|s| s != source);
    }

    /// Route a raw key event. Returns true if the code is bound, so callers
    /// can `preventDefault` only on game keys.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        match action_for_code(code) {
            Some(action) => {
                if pressed {
                    self.press(action, code);
                } else {
                    self.release(action, code);
                }
                true
            }
            None => false,
        }
    }

    /// Drop all held sources (focus loss, run restart)
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
        self.slow.clear();
    }

    /// Snapshot of the logical flags for the next tick
    pub fn flags(&self) -> InputFlags {
        InputFlags {
            left: !self.left.is_empty(),
            right: !self.right.is_empty(),
            slow_requested: !self.slow.is_empty(),
        }
    }
}

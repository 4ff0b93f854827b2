//! Score leaderboard boundary
//!
//! Wire types, submission validation, and storage for the ranked score list.
//! Submission happens strictly after the terminal game-over event and is
//! retryable: a failed submit never loses the run's score. The list side
//! re-sorts defensively and never trusts stored or wire order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Username length bounds for submission
pub const USERNAME_MAX_LEN: usize = 10;
/// Entries returned by the ranked list
pub const LEADERBOARD_SIZE: usize = 10;

/// A stored score with its assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: u32,
    pub username: String,
    pub score: u32,
}

/// Submission body: `{username, score}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScore {
    pub username: String,
    pub score: u32,
}

/// Structured validation failure: `{message, field}` on the wire. The caller
/// may retry with corrected input; simulation state is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

impl ValidationError {
    fn new(message: &str, field: &str) -> Self {
        Self {
            message: message.to_owned(),
            field: field.to_owned(),
        }
    }
}

/// Everything that can go wrong submitting a score. Both variants are
/// recoverable; neither touches the finished run's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The score service could not be reached; resubmission is possible
    /// without replaying.
    #[error("score service unreachable: {0}")]
    Transport(String),
}

/// Check a submission against the service contract: username 1 to 10
/// characters. Score needs no check; the type already rules out negatives.
pub fn validate(new_score: &NewScore) -> Result<(), ValidationError> {
    if new_score.username.is_empty() {
        return Err(ValidationError::new("Username is required", "username"));
    }
    if new_score.username.chars().count() > USERNAME_MAX_LEN {
        return Err(ValidationError::new(
            "Username must be at most 10 characters",
            "username",
        ));
    }
    Ok(())
}

/// Ranked score store. Assigns ids on insert and serves the top entries by
/// score descending, re-sorting on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    next_id: u32,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl Leaderboard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "chrono_dodge_scores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a submission, returning the stored entry with its
    /// assigned id.
    pub fn create(&mut self, new_score: NewScore) -> Result<ScoreEntry, ValidationError> {
        validate(&new_score)?;
        let entry = ScoreEntry {
            id: self.next_id,
            username: new_score.username,
            score: new_score.score,
        };
        self.next_id += 1;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Top entries ranked by score descending, ties broken by insertion
    /// order. Sorted here rather than trusting stored order.
    pub fn top_scores(&self) -> Vec<ScoreEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        ranked.truncate(LEADERBOARD_SIZE);
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Populate the default board on first run, so the leaderboard is never
    /// blank. No-op if any entry exists. Seeds go straight into storage: the
    /// username limit applies to submissions, not to the house names.
    pub fn seed_if_empty(&mut self) {
        if !self.is_empty() {
            return;
        }
        for (username, score) in [
            ("ChronoMaster", 5000),
            ("TimeTraveler", 3500),
            ("Glitch", 2000),
            ("Novice", 800),
        ] {
            let entry = ScoreEntry {
                id: self.next_id,
                username: username.to_owned(),
                score,
            };
            self.next_id += 1;
            self.entries.push(entry);
        }
    }

    /// Load the board from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(board) = serde_json::from_str::<Leaderboard>(&json) {
                    log::info!("loaded {} scores", board.entries.len());
                    return board;
                }
            }
        }

        log::info!("no stored scores, seeding defaults");
        let mut board = Self::new();
        board.seed_if_empty();
        board
    }

    /// Save the board to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut board = Self::new();
        board.seed_if_empty();
        board
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

//! Configuration of [`GuessingGame`](super::GuessingGame).
use gym_game_core::{config::YamlConfig, error::GymError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of [`GuessingGame`](super::GuessingGame).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuessingGameConfig {
    pub(super) range: f32,
    pub(super) bounds: f32,
    pub(super) max_guesses: usize,
    pub(super) human_output: Option<PathBuf>,
}

impl Default for GuessingGameConfig {
    fn default() -> Self {
        Self {
            range: 1000.0,
            bounds: 10000.0,
            max_guesses: 200,
            human_output: None,
        }
    }
}

impl YamlConfig for GuessingGameConfig {}

impl GuessingGameConfig {
    /// Sets the range of the hidden number, drawn from `[-range, range)`.
    pub fn range(mut self, v: f32) -> Self {
        self.range = v;
        self
    }

    /// Sets the bounds of guesses, `[-bounds, bounds]`.
    pub fn bounds(mut self, v: f32) -> Self {
        self.bounds = v;
        self
    }

    /// Sets the number of guesses after which the episode ends.
    pub fn max_guesses(mut self, v: usize) -> Self {
        self.max_guesses = v;
        self
    }

    /// Sets the file the `human` render mode writes to. Stdout is used when unset.
    pub fn human_output(mut self, path: Option<PathBuf>) -> Self {
        self.human_output = path;
        self
    }

    pub(super) fn validate(&self) -> Result<(), GymError> {
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(GymError::InvalidConfig(format!("range = {}", self.range)));
        }
        if !(self.bounds.is_finite() && self.bounds >= self.range) {
            return Err(GymError::InvalidConfig(format!(
                "bounds = {} must cover range = {}",
                self.bounds, self.range
            )));
        }
        if self.max_guesses == 0 {
            return Err(GymError::InvalidConfig("max_guesses must be positive".to_string()));
        }
        Ok(())
    }
}

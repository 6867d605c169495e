//! Configuration of [`GridWorld`](super::GridWorld).
use gym_game_core::{config::YamlConfig, error::GymError};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, path::PathBuf};

/// Configuration of [`GridWorld`](super::GridWorld).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridWorldConfig {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) cell_size: u32,
    pub(super) step_reward: f32,
    pub(super) goal_reward: f32,
    pub(super) human_output: Option<PathBuf>,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            cell_size: 16,
            step_reward: -0.01,
            goal_reward: 1.0,
            human_output: None,
        }
    }
}

impl YamlConfig for GridWorldConfig {}

impl GridWorldConfig {
    /// Sets the number of columns and rows.
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the side of a cell in pixels, used in `rgb_array` rendering.
    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the reward of a step not reaching the goal.
    pub fn step_reward(mut self, v: f32) -> Self {
        self.step_reward = v;
        self
    }

    /// Sets the reward of reaching the goal.
    pub fn goal_reward(mut self, v: f32) -> Self {
        self.goal_reward = v;
        self
    }

    /// Sets the file the `human` render mode writes to. Stdout is used when unset.
    pub fn human_output(mut self, path: Option<PathBuf>) -> Self {
        self.human_output = path;
        self
    }

    /// Width and height of `rgb_array` frames in pixels, `None` if they overflow `u32`.
    pub(super) fn frame_size(&self) -> Option<(u32, u32)> {
        let pixels = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|n| n.checked_mul(self.cell_size))
        };
        Some((pixels(self.width)?, pixels(self.height)?))
    }

    pub(super) fn validate(&self) -> Result<(), GymError> {
        let n_cells = self.width.checked_mul(self.height);
        if self.width == 0 || self.height == 0 || n_cells.map_or(true, |n| n < 2) {
            return Err(GymError::InvalidConfig(format!(
                "grid of {}x{} cannot hold an agent and a goal",
                self.width, self.height
            )));
        }
        if self.cell_size == 0 {
            return Err(GymError::InvalidConfig("cell_size must be positive".to_string()));
        }
        if self.frame_size().is_none() {
            return Err(GymError::InvalidConfig(format!(
                "frames of {}x{} cells of {} pixels are too large",
                self.width, self.height, self.cell_size
            )));
        }
        Ok(())
    }
}

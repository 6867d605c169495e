//! Environments implementing [`gym_game_core::Env`].
//!
//! * [`GridWorld`]: an agent walks to a goal on a grid. Renders as `human`,
//!   `rgb_array` and `ansi`.
//! * [`GuessingGame`]: guess a hidden number from higher/lower hints. Renders as `human`.
//!
//! The `human` render mode writes to the terminal, or to the file set in the
//! configuration. The output is released by `close()`, which is also called when the
//! environment is dropped.
//!
//! Here is an example of running [`GridWorld`] with a random policy.
//!
//! ```no_run
//! use anyhow::Result;
//! use gym_game_core::{
//!     wrappers::{TimeLimit, TimeLimitConfig},
//!     DefaultEvaluator, Evaluator as _, RandomPolicy, space::Discrete,
//! };
//! use gym_game_envs::{GridWorld, GridWorldConfig};
//!
//! type Env = TimeLimit<GridWorld>;
//!
//! fn main() -> Result<()> {
//!     env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
//!
//!     let env_config = TimeLimitConfig::new(GridWorldConfig::default().size(8, 8), 100);
//!     let mut policy = RandomPolicy::<Env>::new(Discrete::new(4), Some(42));
//!
//!     let record = DefaultEvaluator::<Env>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
//!     println!("{:?}", record.get_scalar("Episode return")?);
//!
//!     Ok(())
//! }
//! ```
mod grid_world;
mod guessing_game;
mod viewer;
pub use grid_world::{GridAct, GridObs, GridWorld, GridWorldConfig};
pub use guessing_game::{GuessAct, GuessingGame, GuessingGameConfig, Hint};

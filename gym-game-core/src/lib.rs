#![warn(missing_docs)]
//! Core traits of an episodic environment interface for reinforcement learning.
//!
//! An environment implements [`Env`]: `reset()` starts an episode, `step()` advances it
//! by one timestep, `render()` shows its state and `close()` releases its resources.
//! The render modes an environment supports are advertised by [`Env::METADATA`].
//!
//! ```ignore
//! let mut env = GridWorld::build(&GridWorldConfig::default(), None)?;
//! let mut policy = RandomPolicy::from_env(&env, None);
//! let mut obs = env.reset()?;
//! loop {
//!     let step = env.step(&policy.sample(&obs))?;
//!     if step.is_done() {
//!         break;
//!     }
//!     obs = step.obs;
//! }
//! env.close()?;
//! ```
pub mod config;
pub mod episode;
pub mod error;
pub mod evaluator;
pub mod record;
pub mod render;
pub mod seeding;
pub mod space;
pub mod util;
pub mod wrappers;

mod base;
pub use base::{Act, Env, Obs, Policy, Step, TRUNCATED_KEY};

mod policy;
pub use policy::RandomPolicy;

pub use evaluator::{DefaultEvaluator, Evaluator};
pub use render::{Metadata, RenderMode, Rendered};

#[cfg(test)]
mod dummy;

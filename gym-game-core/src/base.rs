//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::Policy;
use std::fmt::Debug;
pub use step::{Step, TRUNCATED_KEY};

/// An observation of an environment.
///
/// The payload is defined by each environment.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
///
/// The payload is defined by each environment.
pub trait Act: Clone + Debug {}

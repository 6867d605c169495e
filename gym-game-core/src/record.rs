//! Diagnostic key-value records.
//!
//! [`Record`] is the `info` mapping returned by every [`Env::step`](crate::Env::step)
//! and the value passed to a [`Recorder`] during evaluation runs.
//!
//! # Basic Usage
//!
//! ```rust
//! use gym_game_core::record::{Record, RecordValue};
//!
//! // following values are obtained with some process in reality
//! let step = 1;
//! let obs = vec![1f32, 2.0, 3.0, 4.0, 5.0];
//! let reward = -1f32;
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(step as f32));
//! record.insert("reward", RecordValue::Scalar(reward));
//! record.insert("obs", RecordValue::Array1(obs));
//! record.insert("TimeLimit.truncated", RecordValue::Bool(false));
//! ```
//!
//! # Data Types
//!
//! * `Scalar(f32)` - Single floating-point values
//! * `Bool(bool)` - Flags
//! * `DateTime(DateTime<Local>)` - Timestamps
//! * `Array1(Vec<f32>)` - 1-dimensional arrays
//! * `Array2(Vec<f32>, [usize; 2])` - 2-dimensional arrays with shape
//! * `Array3(Vec<f32>, [usize; 3])` - 3-dimensional arrays with shape
//! * `String(String)` - Text values
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;

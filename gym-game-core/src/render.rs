//! Render modes and their outputs.
//!
//! The set of modes an environment supports is advertised by
//! [`Env::METADATA`](crate::Env::METADATA), so callers can query the capability before
//! calling [`Env::render`](crate::Env::render).
use crate::error::GymError;
use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An RGB image of shape `(height, width, 3)`.
pub type Frame = Array3<u8>;

/// Named output format of [`Env::render`](crate::Env::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Displays the state on the current display or terminal. Returns nothing.
    Human,

    /// Returns an RGB [`Frame`] suitable for turning into a video.
    RgbArray,

    /// Returns a terminal-style text representation, possibly with ANSI escape sequences.
    Ansi,
}

impl RenderMode {
    /// The name of the mode, as used in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::RgbArray => "rgb_array",
            Self::Ansi => "ansi",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "rgb_array" => Ok(Self::RgbArray),
            "ansi" => Ok(Self::Ansi),
            _ => Err(GymError::UnsupportedRenderMode(s.to_string())),
        }
    }
}

/// Output of [`Env::render`](crate::Env::render).
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Output of [`RenderMode::Human`].
    None,

    /// Output of [`RenderMode::RgbArray`].
    RgbArray(Frame),

    /// Output of [`RenderMode::Ansi`].
    Ansi(String),
}

impl Rendered {
    /// Returns the frame if this is an RGB array.
    pub fn as_rgb_array(&self) -> Option<&Frame> {
        match self {
            Self::RgbArray(frame) => Some(frame),
            _ => None,
        }
    }

    /// Returns the text if this is an ANSI rendering.
    pub fn as_ansi(&self) -> Option<&str> {
        match self {
            Self::Ansi(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Static capabilities of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Supported render modes, the `render.modes` key of the metadata.
    pub render_modes: &'static [RenderMode],
}

impl Metadata {
    /// Metadata of an environment without rendering support.
    pub const EMPTY: Metadata = Metadata { render_modes: &[] };

    /// Returns `true` if `mode` is one of the supported render modes.
    pub fn supports(&self, mode: RenderMode) -> bool {
        self.render_modes.contains(&mode)
    }

    /// Returns the `render.modes` names.
    pub fn render_mode_names(&self) -> Vec<&'static str> {
        self.render_modes.iter().map(RenderMode::as_str).collect()
    }
}

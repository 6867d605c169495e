//! Terminal output of the `human` render mode.
use anyhow::Result;
use log::debug;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes frames to the terminal, or to a file when a path is given.
///
/// The viewer is owned by one environment and released by its `close()`.
pub(crate) struct Viewer {
    out: Box<dyn Write>,
    frames: usize,
}

impl Viewer {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let out: Box<dyn Write> = match path {
            Some(path) => {
                debug!("Open viewer on {:?}", path);
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => {
                debug!("Open viewer on stdout");
                Box::new(io::stdout())
            }
        };
        Ok(Self { out, frames: 0 })
    }

    /// Replaces the screen with `frame`.
    pub fn show(&mut self, frame: &str) -> Result<()> {
        writeln!(self.out, "{}{}", CLEAR_SCREEN, frame)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// Appends a line without clearing the screen.
    pub fn print(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    pub fn close(mut self) -> Result<()> {
        debug!("Close viewer after {} frames", self.frames);
        self.out.flush()?;
        Ok(())
    }
}

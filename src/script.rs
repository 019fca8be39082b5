//! Replayable command scripts: one JSON object per line, each naming a
//! control or pointer operation.
//!
//! ```text
//! {"op":"add","text":"Hello"}
//! {"op":"down","x":55,"y":55}
//! {"op":"move","x":100,"y":120}
//! {"op":"up"}
//! {"op":"toggle","style":"bold"}
//! {"op":"size","value":"24"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::Deserialize;

use crate::doc::{EditError, StyleFlag};
use crate::engine::{Action, EngineCore};
use crate::geom::Point;
use crate::surface::TextMeasure;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Add { text: String },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Select { index: Option<usize> },
    Toggle { style: StyleFlag },
    Font { family: String },
    /// Raw size text, as a size control would deliver it.
    Size { value: String },
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns `ScriptError::Parse` with the 1-based line number of the first
/// malformed command.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| serde_json::from_str(line).map_err(|source| ScriptError::Parse { line: idx + 1, source }))
        .collect()
}

impl Command {
    /// Apply this command to `core`, hit-testing with `measure`.
    ///
    /// # Errors
    ///
    /// Returns the engine's `EditError` for rejected edits; state is unchanged.
    pub fn apply<M: TextMeasure + ?Sized>(&self, core: &mut EngineCore, measure: &M) -> Result<Vec<Action>, EditError> {
        match self {
            Self::Add { text } => core.add_text(text),
            Self::Down { x, y } => Ok(core.on_pointer_down(Point::new(*x, *y), measure)),
            Self::Move { x, y } => Ok(core.on_pointer_move(Point::new(*x, *y))),
            Self::Up => Ok(core.on_pointer_up()),
            Self::Select { index } => Ok(core.select(*index)),
            Self::Toggle { style } => Ok(core.toggle_style(*style)),
            Self::Font { family } => Ok(core.set_font(family)),
            Self::Size { value } => core.set_font_size_input(value),
        }
    }
}

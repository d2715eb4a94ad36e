//! Painting script parser
//!
//! One command per line:
//!
//! ```text
//! # comment
//! paint 3 4 rainbow
//! erase 3 4 rainbow
//! brush +
//! special
//! undo
//! redo
//! ```

use crate::error::{PaintError, Result};

/// A single script command
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Paint { x: usize, y: usize, layer: String },
    Erase { x: usize, y: usize, layer: String },
    Special,
    Undo,
    Redo,
    BrushUp,
    BrushDown,
}

impl ScriptCommand {
    /// Parse one line; blank lines and comments yield `None`
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Self>> {
        let invalid = |reason: String| PaintError::InvalidCommand {
            line: line_number,
            reason,
        };

        let content = line.split('#').next().unwrap_or_default().trim();
        let words: Vec<&str> = content.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Ok(None);
        };

        let coordinate = |word: &str| {
            word.parse::<usize>()
                .map_err(|_| invalid(format!("invalid coordinate '{}'", word)))
        };

        let command = match (verb.to_ascii_lowercase().as_str(), args) {
            ("paint", &[x, y, layer]) => ScriptCommand::Paint {
                x: coordinate(x)?,
                y: coordinate(y)?,
                layer: layer.to_string(),
            },
            ("erase", &[x, y, layer]) => ScriptCommand::Erase {
                x: coordinate(x)?,
                y: coordinate(y)?,
                layer: layer.to_string(),
            },
            ("special", &[]) => ScriptCommand::Special,
            ("undo", &[]) => ScriptCommand::Undo,
            ("redo", &[]) => ScriptCommand::Redo,
            ("brush", &["+"]) => ScriptCommand::BrushUp,
            ("brush", &["-"]) => ScriptCommand::BrushDown,
            ("paint" | "erase", _) => {
                return Err(invalid(format!("usage: {} X Y LAYER", verb)));
            }
            ("brush", _) => return Err(invalid("usage: brush + | brush -".to_string())),
            _ => return Err(invalid(format!("unknown command '{}'", content))),
        };
        Ok(Some(command))
    }
}

/// Parse a whole script
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = ScriptCommand::parse_line(line, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

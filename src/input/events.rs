//! Input event types exchanged with the gesture dispatcher.
//!
//! Commands also have a one-line text form so a gesture sequence can be
//! replayed from a script:
//!
//! ```text
//! tool polygon 6
//! color 255,128,0
//! width 4
//! down 10 10
//! move 13 14
//! up
//! undo
//! ```

use super::tool::Tool;
use crate::draw::Color;
use crate::util::{self, Point};
use std::str::FromStr;
use thiserror::Error;

/// Gesture phase reported by the UI, in display-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (starts a stroke)
    Down(Point),
    /// Pointer dragged (updates the current stroke)
    Move(Point),
    /// Pointer released (ends the gesture)
    Up,
}

/// Everything the UI can ask the drawing engine to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Pointer(PointerEvent),
    Undo,
    Redo,
    Clear,
    SetTool(Tool),
    SetColor(Color),
    SetWidth(f64),
    SetAlpha(f64),
}

/// Errors produced while parsing the text form of a [`Command`].
#[derive(Debug, Error, PartialEq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Unknown color '{0}' (use a name or r,g,b)")]
    UnknownColor(String),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CommandParseError>,
    },
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandParseError::Empty)?;
        let args: Vec<&str> = words.collect();

        match keyword.to_lowercase().as_str() {
            "down" => Ok(Command::Pointer(PointerEvent::Down(parse_point("down", &args)?))),
            "move" => Ok(Command::Pointer(PointerEvent::Move(parse_point("move", &args)?))),
            "up" => Ok(Command::Pointer(PointerEvent::Up)),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "clear" => Ok(Command::Clear),
            "tool" => parse_tool(&args).map(Command::SetTool),
            "color" => {
                let spec = args.first().ok_or(CommandParseError::MissingArgument {
                    command: "color",
                    expected: "a color name or r,g,b",
                })?;
                parse_color(spec).map(Command::SetColor)
            }
            "width" => parse_scalar("width", &args).map(Command::SetWidth),
            "alpha" => parse_scalar("alpha", &args).map(Command::SetAlpha),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parses a script of commands, one per line.
///
/// Blank lines and anything after `#` are ignored. Errors carry the 1-based
/// line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>, CommandParseError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command = line.parse::<Command>().map_err(|e| CommandParseError::Line {
            line: index + 1,
            source: Box::new(e),
        })?;
        commands.push(command);
    }
    Ok(commands)
}

fn parse_number(word: &str) -> Result<f64, CommandParseError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandParseError::InvalidNumber(word.to_string()))
}

fn parse_point(command: &'static str, args: &[&str]) -> Result<Point, CommandParseError> {
    match args {
        [x, y, ..] => Ok(Point::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(CommandParseError::MissingArgument {
            command,
            expected: "x and y coordinates",
        }),
    }
}

fn parse_scalar(command: &'static str, args: &[&str]) -> Result<f64, CommandParseError> {
    let word = args.first().ok_or(CommandParseError::MissingArgument {
        command,
        expected: "a number",
    })?;
    parse_number(word)
}

fn parse_tool(args: &[&str]) -> Result<Tool, CommandParseError> {
    let name = args.first().ok_or(CommandParseError::MissingArgument {
        command: "tool",
        expected: "a tool name",
    })?;
    match name.to_lowercase().as_str() {
        "none" => Ok(Tool::None),
        "freehand" | "pen" => Ok(Tool::FreeHand),
        "circle" => Ok(Tool::Circle),
        "rectangle" | "rect" => Ok(Tool::Rectangle),
        "polygon" => {
            let sides = match args.get(1) {
                Some(word) => word
                    .parse::<u32>()
                    .map_err(|_| CommandParseError::InvalidNumber(word.to_string()))?,
                None => 5,
            };
            Ok(Tool::polygon(sides))
        }
        other => Err(CommandParseError::UnknownTool(other.to_string())),
    }
}

fn parse_color(spec: &str) -> Result<Color, CommandParseError> {
    if let Some(color) = util::name_to_color(spec) {
        return Ok(color);
    }

    let parts: Vec<&str> = spec.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let channel = |s: &str| s.trim().parse::<u8>().ok();
        if let (Some(r), Some(g), Some(b)) = (channel(*r), channel(*g), channel(*b)) {
            return Ok(Color::from_rgb8(r, g, b));
        }
    }
    Err(CommandParseError::UnknownColor(spec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn parses_pointer_commands() {
        assert_eq!(
            "down 10 12.5".parse::<Command>(),
            Ok(Command::Pointer(PointerEvent::Down(Point::new(10.0, 12.5))))
        );
        assert_eq!("UP".parse::<Command>(), Ok(Command::Pointer(PointerEvent::Up)));
        assert_eq!(
            "move 1".parse::<Command>(),
            Err(CommandParseError::MissingArgument {
                command: "move",
                expected: "x and y coordinates",
            })
        );
    }

    #[test]
    fn parses_tools() {
        assert_eq!("tool circle".parse::<Command>(), Ok(Command::SetTool(Tool::Circle)));
        assert_eq!(
            "tool polygon".parse::<Command>(),
            Ok(Command::SetTool(Tool::Polygon { sides: 5 }))
        );
        assert_eq!(
            "tool polygon 1".parse::<Command>(),
            Ok(Command::SetTool(Tool::Polygon { sides: 3 }))
        );
        assert_eq!(
            "tool lasso".parse::<Command>(),
            Err(CommandParseError::UnknownTool("lasso".into()))
        );
    }

    #[test]
    fn parses_colors_and_scalars() {
        assert_eq!("color red".parse::<Command>(), Ok(Command::SetColor(RED)));
        assert_eq!(
            "color 0,255,0".parse::<Command>(),
            Ok(Command::SetColor(Color::rgb(0.0, 1.0, 0.0)))
        );
        assert_eq!(
            "color 300,0,0".parse::<Command>(),
            Err(CommandParseError::UnknownColor("300,0,0".into()))
        );
        assert_eq!("alpha 0.5".parse::<Command>(), Ok(Command::SetAlpha(0.5)));
        assert_eq!(
            "width NaN".parse::<Command>(),
            Err(CommandParseError::InvalidNumber("NaN".into()))
        );
    }

    #[test]
    fn script_skips_comments_and_reports_line_numbers() {
        let script = "# setup\ntool rectangle\n\ndown 0 0 # press\nmove 5 5\nup\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], Command::SetTool(Tool::Rectangle));

        let err = parse_script("undo\nzoom 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: Unknown command 'zoom'");
    }
}

//! Diagnostic commands
//!
//! Commands are ASCII words, matched case-insensitively, with optional
//! whitespace-separated arguments.

/// Errors that can occur while parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line contained only whitespace
    Empty,
    /// First word is not a known command
    Unknown,
    /// Command needs an argument that was not given
    MissingArgument,
    /// Argument could not be interpreted
    InvalidArgument,
    /// Extra words after a complete command
    UnexpectedArgument,
}

/// Where a `focus` command should move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FocusTarget {
    Up,
    Down,
    Left,
    Right,
    /// Counter-clockwise degrees, 0 = right, 90 = up
    Degrees(i16),
}

impl FocusTarget {
    /// Search direction in degrees
    pub fn degrees(self) -> i32 {
        match self {
            FocusTarget::Right => 0,
            FocusTarget::Up => 90,
            FocusTarget::Left => 180,
            FocusTarget::Down => 270,
            FocusTarget::Degrees(deg) => deg as i32,
        }
    }

    fn parse(word: &str) -> Result<Self, CommandError> {
        if word.eq_ignore_ascii_case("up") {
            Ok(FocusTarget::Up)
        } else if word.eq_ignore_ascii_case("down") {
            Ok(FocusTarget::Down)
        } else if word.eq_ignore_ascii_case("left") {
            Ok(FocusTarget::Left)
        } else if word.eq_ignore_ascii_case("right") {
            Ok(FocusTarget::Right)
        } else {
            word.parse::<i16>()
                .map(FocusTarget::Degrees)
                .map_err(|_| CommandError::InvalidArgument)
        }
    }
}

/// A parsed diagnostic command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Report free heap
    FreeMem,
    /// Report milliseconds since boot
    Uptime,
    /// Navigate back to the previous scene
    Back,
    /// Click the focused widget
    Click,
    /// Move focus
    Focus(FocusTarget),
    /// Dump controller state
    DebugUi,
}

impl Command {
    /// Parse a single command line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = if name.eq_ignore_ascii_case("freemem") {
            Command::FreeMem
        } else if name.eq_ignore_ascii_case("uptime") {
            Command::Uptime
        } else if name.eq_ignore_ascii_case("back") {
            Command::Back
        } else if name.eq_ignore_ascii_case("click") {
            Command::Click
        } else if name.eq_ignore_ascii_case("debugui") {
            Command::DebugUi
        } else if name.eq_ignore_ascii_case("focus") {
            let arg = words.next().ok_or(CommandError::MissingArgument)?;
            Command::Focus(FocusTarget::parse(arg)?)
        } else {
            return Err(CommandError::Unknown);
        };

        if words.next().is_some() {
            return Err(CommandError::UnexpectedArgument);
        }
        Ok(command)
    }

    /// Command keyword
    pub fn name(&self) -> &'static str {
        match self {
            Command::FreeMem => "freemem",
            Command::Uptime => "uptime",
            Command::Back => "back",
            Command::Click => "click",
            Command::Focus(_) => "focus",
            Command::DebugUi => "debugui",
        }
    }
}

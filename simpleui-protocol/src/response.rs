//! Replies to diagnostic commands
//!
//! Responses are rendered as human-readable text through `core::fmt`, so
//! they can be written straight into a UART writer or a `heapless::String`.

use core::fmt;

use heapless::String;

use crate::command::CommandError;

/// Maximum scene name length carried in a snapshot
pub const SNAPSHOT_NAME_LEN: usize = 16;

/// Animation state of the focused widget
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimSnapshot {
    /// `start`, `running` or `finished`
    pub state: &'static str,
    pub progress: f32,
    pub enabled: bool,
}

/// Controller state captured by `debugui`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiSnapshot {
    pub scene: Option<String<SNAPSHOT_NAME_LEN>>,
    pub current: Option<u16>,
    pub previous: Option<u16>,
    pub busy: bool,
    pub first_boot: bool,
    pub animation: Option<AnimSnapshot>,
}

/// Reply to a single command
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Free heap in bytes, `None` when the platform doesn't report it
    FreeMem(Option<usize>),
    /// Milliseconds since boot
    Uptime(u64),
    /// Whether `back` switched scenes
    Back { switched: bool },
    /// Widget that received the click, if any
    Click { widget: Option<u16> },
    /// Widget focused after the move, `None` when focus stayed put
    Focus { moved_to: Option<u16> },
    DebugUi(UiSnapshot),
    /// The line could not be parsed
    Error(CommandError),
}

struct OptId(Option<u16>);

impl fmt::Display for OptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "#{}", id),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::FreeMem(Some(bytes)) => write!(f, "free heap: {} bytes", bytes),
            Response::FreeMem(None) => f.write_str("free heap: unknown"),
            Response::Uptime(ms) => write!(f, "uptime: {} ms", ms),
            Response::Back { switched: true } => f.write_str("back: switched scene"),
            Response::Back { switched: false } => f.write_str("back: no previous scene"),
            Response::Click { widget } => write!(f, "click: {}", OptId(*widget)),
            Response::Focus { moved_to } => write!(f, "focus: {}", OptId(*moved_to)),
            Response::DebugUi(snap) => {
                writeln!(f, "scene: {}", snap.scene.as_deref().unwrap_or("none"))?;
                writeln!(f, "focus: {} (prev {})", OptId(snap.current), OptId(snap.previous))?;
                write!(f, "busy: {} first_boot: {}", snap.busy, snap.first_boot)?;
                if let Some(anim) = snap.animation {
                    write!(
                        f,
                        "\nanim: {} {:.3}{}",
                        anim.state,
                        anim.progress,
                        if anim.enabled { "" } else { " (paused)" }
                    )?;
                }
                Ok(())
            }
            Response::Error(err) => write!(f, "error: {:?}", err),
        }
    }
}

impl Response {
    /// Render into a fixed-capacity string
    ///
    /// Fails if the text doesn't fit.
    pub fn write_to<const N: usize>(&self, out: &mut String<N>) -> fmt::Result {
        use core::fmt::Write;
        write!(out, "{}", self)
    }
}

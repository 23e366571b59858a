//! SimpleUI diagnostic protocol
//!
//! A plain-text command channel (typically a UART or RTT console) used to
//! poke at a running UI while debugging. One command per line:
//!
//! ```text
//! freemem            -> free heap reported by the platform
//! uptime             -> milliseconds since boot
//! back               -> navigate to the previous scene
//! click              -> click the focused widget
//! focus <dir|deg>    -> move focus (up/down/left/right or degrees)
//! debugui            -> dump focus / scene / animation state
//! ```
//!
//! Bytes are fed into a `LineParser`; each completed line is turned into a
//! `Command`, executed by the UI controller, and answered with a
//! `Response` rendered through `core::fmt`.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod response;

pub use command::{Command, CommandError, FocusTarget};
pub use line::{LineError, LineParser, MAX_LINE_LEN};
pub use response::{AnimSnapshot, Response, UiSnapshot};

//! Interactive call-control session.

mod command;
mod completion;
mod editor;
mod interactive;

pub use command::{InteractiveCommand, COMMAND_HELP};
pub use completion::{complete_line, complete_url, HOLD_MUSIC_URLS};
pub use editor::{EditorInput, SessionHelper};
pub use interactive::*;

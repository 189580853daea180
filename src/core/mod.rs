//! Frontend-independent input vocabulary.
//!
//! - event: keys and input events
//! - command: what a key binding does

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};

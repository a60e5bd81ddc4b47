//! Line-oriented command shell around a single tabiya game.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, ShellOption};
pub use error::ShellError;
pub use session::{Session, ShellConfig};

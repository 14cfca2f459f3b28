//! Command implementations using the command pattern

pub mod base;
pub mod create;
pub mod submit;
pub mod validators;

pub use base::{Command, CommandContext};
pub use create::CreateCommand;
pub use submit::SubmitCommand;

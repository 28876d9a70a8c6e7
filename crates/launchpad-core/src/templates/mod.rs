//! Project templates and their external initializers

pub mod command;
pub mod golang;
pub mod registry;

pub use command::{open_in_editor, InitCommand};
pub use registry::{ProjectKind, Template};

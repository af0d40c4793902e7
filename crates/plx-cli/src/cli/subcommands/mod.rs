mod project;

pub use project::{CreateArgs, ProjectCommands};

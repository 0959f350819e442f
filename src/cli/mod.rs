pub mod commands;
pub mod formatters;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, run_shell, SCRIPT_ENV};
pub use shell_context::{CliMode, ShellContext};
pub use crate::errors::CliError;

//! Interactive shell over the member service.

pub mod command;
pub mod shell;

pub use command::{Command, CommandError};
pub use shell::{Flow, ShellError, handle_line, run_shell};

//! Line-oriented shell driving `MemberService`.

use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

use crate::usecase::{FindMemberError, MemberService};

use super::command::{Command, CommandError, HELP};

const PROMPT: &str = "member> ";

/// Errors that end the shell
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode members as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether the shell keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Parse and execute one line of input, writing the result to `out`.
///
/// Parse errors and lookup misses are reported on `out` and never end the shell.
pub async fn handle_line<W: Write>(
    service: &MemberService,
    line: &str,
    out: &mut W,
) -> Result<Flow, ShellError> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(CommandError::Empty) => return Ok(Flow::Continue),
        Err(e) => {
            tracing::debug!("Rejected input '{}': {}", line, e);
            writeln!(out, "error: {e}")?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Join(member) => {
            let summary = member.to_string();
            match service.join(member).await {
                Ok(()) => writeln!(out, "joined {summary}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Command::Find(id) => match service.find_member(id).await {
            Ok(member) => writeln!(out, "{member}")?,
            Err(FindMemberError::NotFound(id)) => writeln!(out, "member {id} not found")?,
        },
        Command::List => {
            let members = service.list_members().await;
            if members.is_empty() {
                writeln!(out, "(no members)")?;
            }
            for member in members {
                writeln!(out, "{member}")?;
            }
        }
        Command::Dump => {
            let members = service.list_members().await;
            writeln!(out, "{}", serde_json::to_string_pretty(&members)?)?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

/// Run the interactive shell on stdin/stdout until `quit`, Ctrl-C or Ctrl-D.
pub async fn run_shell(service: MemberService) -> Result<(), ShellError> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();

    writeln!(
        stdout,
        "member-registry shell (started {}). Type 'help' for commands.",
        member_registry_shared::time::now_jst().format("%Y-%m-%d %H:%M:%S %:z")
    )?;

    loop {
        // readline blocks the current thread
        let line = tokio::task::block_in_place(|| editor.readline(PROMPT));
        match line {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if handle_line(&service, &line, &mut stdout).await? == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                tracing::debug!("Input closed");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!("Shell exited");
    Ok(())
}

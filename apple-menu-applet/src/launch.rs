// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Launch-and-forget spawning of external commands.
//!
//! The applet never tracks a child once it is running; the only observable
//! outcome is whether the process could be started at all.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("empty command line")]
    EmptyCommandLine,

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Spawns `line` without waiting on it. The command line is split on
/// whitespace; all of the fixed commands and the typical app-store commands
/// are plain `program arg arg` invocations, so no shell is involved and a
/// missing executable is reported by the spawn itself.
pub fn spawn_command_line(line: &str) -> Result<(), LaunchError> {
    let mut parts = line.split_whitespace();
    let program = parts.next().ok_or(LaunchError::EmptyCommandLine)?;

    let child = Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: program.to_owned(),
            source,
        })?;

    tracing::debug!(pid = child.id(), command = line, "launched");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(matches!(
            spawn_command_line("   "),
            Err(LaunchError::EmptyCommandLine)
        ));
    }

    #[test]
    fn spawning_a_noop_succeeds() {
        assert!(spawn_command_line("true").is_ok());
    }

    #[test]
    fn missing_executable_names_the_program() {
        let err = spawn_command_line("/nonexistent-binary --flag").unwrap_err();
        match err {
            LaunchError::Spawn { program, .. } => {
                assert_eq!(program, "/nonexistent-binary");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

// SPDX-License-Identifier: MIT
//! Opens a URL in the user's default browser.
//!
//! One decision point: host OS family → launch command. The spawn is
//! detached; callers that treat the launch as best-effort drop the `Result`.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Host OS family, as far as browser launching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the BSDs — anything that ships `xdg-open`.
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Program plus fixed argument prefix that hands a URL to the default
/// browser. The URL always goes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

pub fn launch_command(platform: Platform) -> LaunchCommand {
    match platform {
        Platform::Windows => LaunchCommand {
            program: "cmd",
            args: &["/c", "start"],
        },
        Platform::MacOs => LaunchCommand {
            program: "open",
            args: &[],
        },
        Platform::Unix => LaunchCommand {
            program: "xdg-open",
            args: &[],
        },
    }
}

/// Open `url` in the default browser without waiting for the child to exit.
pub fn open(url: &str) -> Result<()> {
    open_with(launch_command(Platform::current()), url)
}

/// Spawn a specific launch command. Split out from [`open`] so a failing
/// launcher can be exercised without depending on the host's PATH.
pub fn open_with(command: LaunchCommand, url: &str) -> Result<()> {
    Command::new(command.program)
        .args(command.args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn `{}`", command.program))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_table() {
        assert_eq!(
            launch_command(Platform::Windows),
            LaunchCommand {
                program: "cmd",
                args: &["/c", "start"],
            }
        );
        assert_eq!(
            launch_command(Platform::MacOs),
            LaunchCommand {
                program: "open",
                args: &[],
            }
        );
        assert_eq!(
            launch_command(Platform::Unix),
            LaunchCommand {
                program: "xdg-open",
                args: &[],
            }
        );
    }

    #[test]
    fn current_platform_has_a_descriptor() {
        let command = launch_command(Platform::current());
        assert!(!command.program.is_empty());
    }

    #[test]
    fn unknown_program_reports_launch_failure() {
        let bogus = LaunchCommand {
            program: "definitely-not-a-browser-opener",
            args: &[],
        };
        assert!(open_with(bogus, "http://localhost:3000").is_err());
    }
}

//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{Result, RosterError};

/// Generate shell completions on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(&args.shell, &mut std::io::stdout().lock())
}

fn write_completions(shell_name: &str, out: &mut impl Write) -> Result<()> {
    let shell = parse_shell(shell_name).ok_or_else(|| RosterError::UnsupportedShell {
        shell: shell_name.to_string(),
    })?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "roster", out);
    Ok(())
}

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

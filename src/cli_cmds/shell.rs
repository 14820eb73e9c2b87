use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

use crate::cli::{dispatch, ShellLine};
use crate::config::Config;
use crate::gallery::Gallery;
use crate::utils::split_command_line;

/// Interactive session. Every line is one command; state carries over
/// between lines until `exit`, `quit` or end of input.
pub async fn run_shell(gallery: &mut Gallery, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("wallypaper shell. Type 'help' for commands, 'exit' to leave.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let words = split_command_line(line);
        let parsed = match ShellLine::try_parse_from(words.iter().map(String::as_str)) {
            Ok(parsed) => parsed,
            Err(e) => {
                match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        print!("{}", e.render())
                    }
                    _ => eprint!("{}", e.render()),
                }
                continue;
            }
        };

        debug!(line, "shell command");
        if let Err(e) = dispatch(gallery, config, parsed.command).await {
            eprintln!("Error: {:#}", e);
        }
    }

    Ok(())
}

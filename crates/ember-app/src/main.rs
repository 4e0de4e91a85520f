//! EMBER console desktop entry point.
//!
//! Wires the interpreter to a stdin read loop with std stand-ins for the
//! scheduler and message sink, and registers a set of demo commands. Pass a
//! TOML config path as the first argument to override the defaults. Type
//! `help` for the command listing, Ctrl-D to quit.

mod commands;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use ember_console::Interpreter;
use ember_platform::{DesktopScheduler, StdoutSink};
use ember_types::ConsoleConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            ConsoleConfig::from_toml_str(&text).with_context(|| format!("parsing {path}"))?
        },
        None => ConsoleConfig::default(),
    };
    log::info!(
        "Starting EMBER console (delimiter {:?}, row limit {})",
        config.quote_delimiter,
        config.max_row_length,
    );

    let sched = DesktopScheduler::default();
    let sink = StdoutSink;
    let mut console = Interpreter::new(config, &sched, &sink);
    commands::register_demo_commands(&mut console);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "cmd: ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);
        // `help` needs interpreter access, so the loop intercepts it rather
        // than registering it as a command.
        if line.trim() == "help" {
            console.help();
        } else {
            console.parse_line(line);
        }
    }
    Ok(())
}

use std::{
    io::{self, Stdout},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use cube_core::{CubeSession, SessionConfig, SolveOutcome};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};

mod render;

use render::{TerminalSink, colorize_all};

type Session = CubeSession<TerminalSink<Stdout>>;

/// Turns the faces of a 3x3x3 cube and undoes them again
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Session configuration file, in TOML format
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of clockwise quarter-turns and print the cube
    Apply {
        /// Face letters to turn, e.g. "R U F" or "RUF"
        moves: String,
        /// Undo the sequence again afterwards
        #[arg(long)]
        solve: bool,
        /// Print the unfolded cube instead of the facelet string
        #[arg(long)]
        net: bool,
    },
    /// Read commands from stdin: face letters, `solve`, `reset`, `show`,
    /// `steps`, `exit`
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SessionConfig::load(path)?
        }
        None => SessionConfig::default(),
    };

    let mut session = CubeSession::with_sink(config, TerminalSink::new(io::stdout()));

    match cli.command {
        Commands::Apply { moves, solve, net } => {
            session.turn_sequence(&moves)?;
            if solve {
                session.solve();
            }
            print_cube(&session, net);
        }
        Commands::Repl => run_repl(&mut session)?,
    }

    Ok(())
}

fn print_cube(session: &Session, net: bool) {
    let palette = &session.config().palette;
    if net {
        println!("{}", colorize_all(&session.state().net(palette), palette));
    } else {
        println!("{}", colorize_all(&session.facelet_string(), palette));
    }
}

fn run_repl(session: &mut Session) -> color_eyre::Result<()> {
    print_cube(session, true);

    let mut line = String::new();
    loop {
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break Ok(());
        }

        match line.trim() {
            "" => continue,
            "exit" | "quit" => break Ok(()),
            "solve" => {
                if let SolveOutcome::Solved { undone } = session.solve() {
                    info!("Undid {undone} moves");
                }
            }
            "reset" => session.reset(),
            "show" => {
                print_cube(session, true);
                continue;
            }
            "steps" => {
                println!("{}", session.steps().iter().join("\n"));
                continue;
            }
            moves => {
                if let Err(e) = session.turn_sequence(moves) {
                    eprintln!("{e}");
                    continue;
                }
            }
        }

        print_cube(session, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_apply() {
        let cli = Cli::try_parse_from(["cube", "-vv", "apply", "R U F", "--solve"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Apply { ref moves, solve: true, net: false } if moves == "R U F"
        ));
    }
}

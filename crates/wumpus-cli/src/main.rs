//! Command-line Hunt the Wumpus.
//!
//! A thin line-oriented driver: read a line from stdin, hand it to the
//! interpreter, write the returned lines to stdout. All game logic lives
//! in `wumpus-core` and `wumpus-interp`.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use wumpus_core::{GameEngine, GameRandomSource};
use wumpus_interp::{Interpreter, RANDOMIZE};

#[derive(Parser)]
#[command(
    name = "wumpus",
    about = "Hunt the Wumpus — the classic cave-crawling text game",
    version
)]
struct Cli {
    /// RNG seed for a reproducible cave setup
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(seed: Option<u64>) -> Result<(), String> {
    let rng = match seed {
        Some(seed) => GameRandomSource::with_seed(seed),
        None => GameRandomSource::new(),
    };
    let engine = GameEngine::new(Box::new(rng));
    let mut interp = Interpreter::new(engine);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    let mut output = interp.input(RANDOMIZE);
    loop {
        write_batch(&mut stdout, &output)?;
        if interp.finished() {
            break;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                // EOF: one final empty line lets a pending prompt flush.
                write_batch(&mut stdout, &interp.input(""))?;
                break;
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        output = interp.input(line.trim_end_matches(['\r', '\n']));
    }
    Ok(())
}

/// Write one batch of output lines, newline-separated with no trailing
/// newline, so prompts leave the cursor on their own line.
fn write_batch(out: &mut impl Write, lines: &[String]) -> Result<(), String> {
    out.write_all(lines.join("\n").as_bytes())
        .map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}

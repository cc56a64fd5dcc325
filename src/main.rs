#![deny(clippy::all, clippy::pedantic)]

mod app;
mod input;
mod ui;

use std::env;

use minesweeper_solver::difficulty::Difficulty;

use crate::app::App;

/// Parse `minesweeper [easy|medium|hard] [--auto]` from the process args.
fn parse_args() -> (Difficulty, bool) {
    let mut difficulty = Difficulty::Easy;
    let mut auto = false;
    for arg in env::args().skip(1) {
        if arg == "--auto" {
            auto = true;
        } else if let Some(parsed) = Difficulty::from_arg(&arg) {
            difficulty = parsed;
        } else {
            eprintln!("ignoring unrecognized argument: {arg}");
        }
    }
    (difficulty, auto)
}

fn main() {
    env_logger::init();
    let (difficulty, auto) = parse_args();
    let mut app = App::new(difficulty);
    let result = if auto { app.run_auto() } else { app.run() };
    if let Err(e) = result {
        eprintln!("Application error: {e}");
    }
}

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;
use rand::rngs::ThreadRng;
use ratatui::DefaultTerminal;

use minesweeper_solver::board::{Board, Status};
use minesweeper_solver::difficulty::Difficulty;
use minesweeper_solver::harness;

use crate::input::{Dir, InputAction, translate_event};
use crate::ui;

pub struct App {
    board: Board,
    difficulty: Difficulty,
    cursor: (usize, usize),
    started_at: Option<Instant>,
    rng: ThreadRng,
    running: bool,
}

impl App {
    pub fn new(difficulty: Difficulty) -> Self {
        let board = Board::with_difficulty(difficulty);
        let cursor = (board.width() / 2, board.height() / 2);
        Self { board, difficulty, cursor, started_at: None, rng: rand::rng(), running: true }
    }

    /// Run the solver-driven harness to completion with no terminal UI,
    /// printing the outcome. This is the non-interactive `--auto` mode.
    pub fn run_auto(&mut self) -> Result<()> {
        let status = harness::autoplay(&mut self.board, &mut self.rng)?;
        match status {
            Status::Win => println!("cleared {:?} in autoplay", self.difficulty),
            Status::Lose => println!("hit a mine during autoplay"),
            Status::Playing => unreachable!("autoplay always terminates"),
        }
        Ok(())
    }

    /// Run the interactive terminal UI.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                let (x, y) = self.cursor;
                ui::draw_app(
                    frame,
                    self.difficulty,
                    self.board.mines(),
                    self.board.flags(),
                    self.elapsed_secs(),
                    self.board.width(),
                    self.board.height(),
                    |cx, cy| self.board.cell_state(cy, cx),
                    Some((x, y)),
                    self.board.status(),
                )
            })?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let event = event::read()?;
            if !matches!(event, Event::Key(_)) {
                continue;
            }
            if let Some(action) = translate_event(event, self.board.status()) {
                self.handle_action(action);
            }
        }
        Ok(())
    }

    fn elapsed_secs(&self) -> u64 {
        self.started_at.map_or(0, |t| t.elapsed().as_secs())
    }

    fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Move(dir) => self.move_cursor(dir),
            InputAction::Reveal => self.reveal_cursor(),
            InputAction::Flag => self.board.toggle_flag(self.cursor.1, self.cursor.0),
            InputAction::Chord => {}
            InputAction::Restart => self.restart(),
            InputAction::ChangeDifficulty => {
                self.difficulty = self.difficulty.cycle();
                self.restart();
            }
            InputAction::Quit => self.running = false,
        }
    }

    fn move_cursor(&mut self, dir: Dir) {
        let (x, y) = self.cursor;
        let (w, h) = (self.board.width(), self.board.height());
        self.cursor = match dir {
            Dir::Left => (x.saturating_sub(1), y),
            Dir::Right => ((x + 1).min(w - 1), y),
            Dir::Up => (x, y.saturating_sub(1)),
            Dir::Down => (x, (y + 1).min(h - 1)),
        };
    }

    fn reveal_cursor(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        let (x, y) = self.cursor;
        let hit_mine = self.board.open(y, x, &mut self.rng);
        if hit_mine {
            info!("opened a mine at ({x}, {y})");
        }
    }

    fn restart(&mut self) {
        self.board = Board::with_difficulty(self.difficulty);
        self.started_at = None;
    }
}

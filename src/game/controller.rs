//! Read-eval loop.
//!
//! [`Game::run`] checks the win condition, shows the turn snapshot, pulls the
//! next command and dispatches it, until the player wins or input ends.
//! Input and output sit behind [`CommandSource`] and [`Presenter`] so tests
//! can drive a whole game from a script.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::logutil::escape_log;

use super::commands::{execute_command, Command};
use super::parser::normalise_input;
use super::render::{status_lines, win_lines};
use super::state::GameState;
use super::win::check_win_condition;

/// Supplies one normalised command per turn. `Ok(None)` means input ended.
pub trait CommandSource {
    fn next_command(&mut self) -> Result<Option<Vec<String>>>;
}

/// Receives lines of text for the player.
pub trait Presenter {
    fn show(&mut self, lines: &[String]) -> Result<()>;
}

/// How a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Won,
    InputClosed,
}

/// Prompting line reader over any `BufRead`, normally stdin.
pub struct LineSource<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl<R: BufRead, W: Write> CommandSource for LineSource<R, W> {
    fn next_command(&mut self) -> Result<Option<Vec<String>>> {
        write!(self.prompt, "> ")?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        debug!("Input line: {}", escape_log(&line));
        Ok(Some(normalise_input(&line)))
    }
}

/// Pre-tokenised commands, consumed in order.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    commands: VecDeque<Vec<String>>,
}

impl ScriptedSource {
    /// Each entry is a raw line, normalised the same way live input is.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            commands: lines
                .into_iter()
                .map(|line| normalise_input(line.as_ref()))
                .collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for ScriptedSource {
    fn next_command(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.commands.pop_front())
    }
}

/// Writes each line to an `io::Write`.
pub struct WriterPresenter<W> {
    out: W,
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    fn show(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every shown line, for assertions.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub lines: Vec<String>,
}

impl RecordingPresenter {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line == needle)
    }
}

impl Presenter for RecordingPresenter {
    fn show(&mut self, lines: &[String]) -> Result<()> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }
}

/// Owns the game state for the duration of a session.
pub struct Game<'w> {
    state: GameState<'w>,
    show_mass: bool,
    turns: u64,
}

impl<'w> Game<'w> {
    pub fn new(state: GameState<'w>) -> Self {
        Self {
            state,
            show_mass: true,
            turns: 0,
        }
    }

    pub fn with_mass_line(mut self, show: bool) -> Self {
        self.show_mass = show;
        self
    }

    pub fn state(&self) -> &GameState<'w> {
        &self.state
    }

    /// Commands dispatched so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Run one command: dispatch it and show the failure line, if any.
    pub fn step<P: Presenter>(&mut self, tokens: &[String], presenter: &mut P) -> Result<()> {
        let command = Command::from_tokens(tokens);
        debug!("Turn {}: {:?}", self.turns + 1, command);
        self.turns += 1;

        if let Err(e) = execute_command(&mut self.state, &command) {
            presenter.show(&[e.to_string()])?;
        }
        Ok(())
    }

    /// Loop until the win condition holds or the source runs dry.
    pub fn run<S, P>(&mut self, source: &mut S, presenter: &mut P) -> Result<GameEnd>
    where
        S: CommandSource,
        P: Presenter,
    {
        loop {
            if check_win_condition(&self.state) {
                presenter.show(&win_lines(&self.state))?;
                info!("Game won after {} turns", self.turns);
                return Ok(GameEnd::Won);
            }

            presenter.show(&status_lines(&self.state, self.show_mass))?;

            let Some(tokens) = source.next_command()? else {
                info!("Input closed after {} turns", self.turns);
                return Ok(GameEnd::InputClosed);
            };
            self.step(&tokens, presenter)?;
        }
    }
}

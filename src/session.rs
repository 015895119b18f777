//! Interactive menu loop.
//!
//! A `Session` borrows the game for its lifetime, reads one menu choice per
//! line, applies it, and redraws. It is generic over the reader and writer so
//! tests can drive it with in-memory transcripts.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::core::StackGame;
use crate::input::MenuReader;
use crate::term::{ConsoleRenderer, QueueView};
use crate::types::MenuChoice;

/// Whether the loop should keep prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<'g, R, W: Write> {
    game: &'g mut StackGame,
    input: MenuReader<R>,
    renderer: ConsoleRenderer<W>,
    view: QueueView,
}

impl<'g, R: BufRead, W: Write> Session<'g, R, W> {
    pub fn new(game: &'g mut StackGame, input: R, renderer: ConsoleRenderer<W>) -> Self {
        Self {
            game,
            input: MenuReader::new(input),
            renderer,
            view: QueueView::new(),
        }
    }

    /// Fill the queue and show it, then prompt until the operator exits.
    pub fn run(&mut self) -> Result<()> {
        self.initialize()?;
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// Startup banner, pre-fill, and first queue dump.
    pub fn initialize(&mut self) -> Result<()> {
        self.renderer.draw(&self.view.init_banner())?;

        let mut inserted = Vec::new();
        let count = self.game.fill_with(|piece| inserted.push(piece));
        for piece in inserted {
            self.renderer.draw(&self.view.inserted(piece))?;
        }

        self.renderer.draw(&self.view.initialized(count))?;
        self.show_queue()
    }

    /// Show the menu, read one line, and apply it.
    pub fn step(&mut self) -> Result<Flow> {
        self.renderer.draw(&self.view.menu())?;
        self.renderer.draw_inline(&self.view.prompt())?;

        let choice = match self.input.next_choice()? {
            Some(Ok(choice)) => choice,
            Some(Err(err)) => {
                warn!(%err, "invalid menu input");
                self.renderer.draw(&self.view.invalid_option())?;
                return Ok(Flow::Continue);
            }
            None => {
                info!("input closed");
                MenuChoice::Exit
            }
        };

        self.apply(choice)
    }

    fn apply(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Play => {
                let lines = match self.game.play() {
                    Ok(piece) => self.view.played(piece),
                    Err(err) => self.view.error(&err),
                };
                self.renderer.draw(&lines)?;
                self.show_queue()?;
            }
            MenuChoice::Insert => {
                let lines = match self.game.insert() {
                    Ok(piece) => self.view.inserted(piece),
                    Err(err) => self.view.error(&err),
                };
                self.renderer.draw(&lines)?;
                self.show_queue()?;
            }
            MenuChoice::Exit => {
                self.renderer.draw(&self.view.farewell())?;
                info!(
                    generated = self.game.generator().generated(),
                    "session finished"
                );
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_queue(&mut self) -> Result<()> {
        self.renderer.draw(&self.view.queue(self.game.queue()))
    }

    pub fn into_renderer(self) -> ConsoleRenderer<W> {
        self.renderer
    }
}

#![cfg(feature = "std")]

//! Line-oriented host loop for playing a session over any reader/writer pair.

use crate::{
    common::GameError,
    game::{BoardEngine, GameStatus},
    ui::render_view,
};
use rand::Rng;
use std::io::{BufRead, Write};

/// What a single line of input asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Click the cell with this `"<row>-<col>"` key.
    Flip(&'a str),
    /// Start a new random board.
    Reset,
    Quit,
    /// Blank line.
    Skip,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Skip,
            "q" | "quit" | "exit" => Command::Quit,
            "reset" | "new" => Command::Reset,
            key => Command::Flip(key),
        }
    }
}

/// Drive `engine` from `input` until the board is solved, the player quits or
/// input runs out. The board is written to `output` after every move.
pub fn run_session<R, I, O>(
    engine: &mut BoardEngine,
    rng: &mut R,
    input: I,
    mut output: O,
) -> anyhow::Result<GameStatus>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    write!(output, "{}", render_view(engine))?;
    if engine.is_won() {
        return Ok(GameStatus::Won);
    }
    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Command::Skip => continue,
            Command::Quit => break,
            Command::Reset => {
                engine.reset(rng)?;
                writeln!(output, "New board.")?;
            }
            Command::Flip(key) => match engine.flip_key(key) {
                Ok(_) => {}
                Err(GameError::InvalidCoord(e)) => {
                    writeln!(output, "Invalid move '{}': {}", key, e)?;
                    continue;
                }
                Err(e @ GameError::AlreadyWon) => return Err(e.into()),
            },
        }
        write!(output, "{}", render_view(engine))?;
        if engine.is_won() {
            break;
        }
    }
    output.flush()?;
    Ok(engine.status())
}

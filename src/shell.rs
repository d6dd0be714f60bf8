//! Line-oriented command loop around a [`Game`].

use alloc::borrow::ToOwned;
use alloc::string::String;
use std::io::{BufRead, Write};

use crate::command::Command;
use crate::error::{ParseCommandError, ShellError};
use crate::game::Game;

/// Prompt written before every read.
pub const PROMPT: &str = "(Cmd) ";

/// Token the shell dispatches when input runs out.
const END_OF_INPUT: &str = "EOF";

/// An interactive session reading commands from `input` and writing the
/// transcript to `output`.
///
/// # Example
///
/// ```
/// use bjduel::{Game, GameOptions, Shell};
///
/// let game = Game::new(GameOptions::default(), 3).unwrap();
/// let mut transcript = Vec::new();
/// Shell::new(&b"pass\nno\n"[..], &mut transcript).run(game).unwrap();
///
/// let transcript = String::from_utf8(transcript).unwrap();
/// assert!(transcript.contains("Dealer score: "));
/// ```
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    output: W,
    /// Last non-empty line, replayed when the user enters a blank line.
    last_line: Option<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_line: None,
        }
    }

    /// Shows the opening deal and processes commands until the session
    /// ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written, or if a
    /// command fails in a way the game cannot recover from (the dealer
    /// running the deck dry).
    pub fn run(&mut self, mut game: Game) -> Result<(), ShellError> {
        writeln!(self.output, "{}", game.table())?;

        loop {
            let line = self.read_line()?;
            if self.dispatch(&mut game, &line)? {
                break;
            }
        }

        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(END_OF_INPUT.to_owned());
        }
        Ok(line.trim().to_owned())
    }

    /// Handles one input line. Returns `true` once the session is over.
    fn dispatch(&mut self, game: &mut Game, line: &str) -> Result<bool, ShellError> {
        let line = if line.is_empty() {
            match self.last_line.clone() {
                Some(last) => last,
                None => return Ok(false),
            }
        } else {
            if line == END_OF_INPUT {
                self.last_line = None;
            } else {
                self.last_line = Some(line.to_owned());
            }
            line.to_owned()
        };

        if let Some(topic) = help_topic(&line) {
            self.help(topic)?;
            return Ok(false);
        }

        match line.parse::<Command>() {
            Ok(command) => {
                let reply = game.apply(command)?;
                writeln!(self.output, "{reply}")?;
                Ok(reply.is_final())
            }
            Err(ParseCommandError::Unknown(_)) => {
                game.cancel_quit();
                writeln!(self.output, "*** Unknown syntax: {line}")?;
                Ok(false)
            }
            Err(ParseCommandError::Empty) => Ok(false),
        }
    }

    fn help(&mut self, topic: &str) -> Result<(), ShellError> {
        if topic.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "Documented commands (type help <topic>):")?;
            writeln!(self.output, "========================================")?;
            let mut names: alloc::vec::Vec<&str> =
                Command::TOKENS.iter().map(|&(token, _)| token).collect();
            names.push("help");
            names.sort_unstable();
            writeln!(self.output, "{}", names.join("  "))?;
            writeln!(self.output)?;
            return Ok(());
        }

        if topic == "help" {
            writeln!(
                self.output,
                "List available commands, or describe one with \"help <command>\""
            )?;
            return Ok(());
        }

        match topic.parse::<Command>() {
            Ok(command) => writeln!(self.output, "{}", command.description())?,
            Err(_) => writeln!(self.output, "*** No help on {topic}")?,
        }
        Ok(())
    }
}

/// Returns the requested help topic if `line` asks for help.
fn help_topic(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix('?')
        .or_else(|| {
            let rest = line.strip_prefix("help")?;
            (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
        })?;
    Some(rest.trim())
}

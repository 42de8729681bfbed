use std::path::PathBuf;

pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod parser;
pub mod session;
pub mod store;

use error::PaintError;
use parser::{Parser, ParserError};
use session::Session;

pub const HELP: &str = "\
Commands:
  brand <text>              set the brand field
  color <text>              set the color field (also: colour)
  add [brand / color]       add the paint in the fields
  remove [brand / color]    remove the paint in the fields
  list                      show the collection
  save [path]               write the collection to a text file
  fields                    show the current field values
  clear                     empty both fields
  help                      show this message
  quit                      leave (also: exit)";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Brand(String),
    Color(String),
    Add(Option<(String, String)>),
    Remove(Option<(String, String)>),
    List,
    Save(Option<PathBuf>),
    Fields,
    Clear,
    Help,
    Quit,
}

/// What the console should do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Quit,
}

impl Command {
    /// Parses one console line. Blank lines yield `Ok(None)`.
    pub fn from_line(input: &str) -> Result<Option<Self>, ParserError> {
        let Some(line) = Parser::parse(input) else {
            return Ok(None);
        };
        let rest = line.rest;

        let command = match line.word.as_str() {
            "brand" => Command::Brand(Self::required(rest, "brand name")?),
            "color" | "colour" => Command::Color(Self::required(rest, "color name")?),
            "add" => Command::Add(Self::optional_pair(rest)?),
            "remove" => Command::Remove(Self::optional_pair(rest)?),
            "save" => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "list" => Self::bare(Command::List, &line.word, rest)?,
            "fields" => Self::bare(Command::Fields, &line.word, rest)?,
            "clear" => Self::bare(Command::Clear, &line.word, rest)?,
            "help" => Self::bare(Command::Help, &line.word, rest)?,
            "quit" | "exit" => Self::bare(Command::Quit, &line.word, rest)?,
            _ => return Err(ParserError::UnknownCommand(line.word.clone())),
        };

        Ok(Some(command))
    }

    fn required(rest: &str, what: &'static str) -> Result<String, ParserError> {
        if rest.is_empty() {
            return Err(ParserError::MissingArgument(what));
        }
        Ok(rest.to_string())
    }

    fn optional_pair(rest: &str) -> Result<Option<(String, String)>, ParserError> {
        if rest.is_empty() {
            return Ok(None);
        }
        Parser::parse_pair(rest).map(Some)
    }

    fn bare(command: Command, word: &str, rest: &str) -> Result<Command, ParserError> {
        if !rest.is_empty() {
            return Err(ParserError::UnexpectedArgument(word.to_string()));
        }
        Ok(command)
    }

    /// Runs the command against the session. Every failure becomes a message.
    pub fn execute(self, session: &mut Session) -> Reply {
        let message = match self {
            Command::Brand(text) => {
                session.set_brand(&text);
                format!("Brand set to '{}'", text)
            }
            Command::Color(text) => {
                session.set_color(&text);
                format!("Color set to '{}'", text)
            }
            Command::Add(pair) => {
                Self::fill(session, pair);
                match session.add() {
                    Ok(()) => "Paint added successfully!".to_string(),
                    Err(e) => e.to_string(),
                }
            }
            Command::Remove(pair) => {
                Self::fill(session, pair);
                match session.remove() {
                    Ok(()) => "Paint removed successfully!".to_string(),
                    Err(e) => e.to_string(),
                }
            }
            Command::List => session.listing(),
            Command::Save(destination) => match session.save(destination.as_deref()) {
                Ok(path) => format!("Paint list saved to {}", path.display()),
                Err(PaintError::Io(e)) => format!("Error saving paint list: {}", e),
                Err(e) => format!("Error saving paint list: {}", e),
            },
            Command::Fields => {
                let form = session.form();
                format!("Brand: '{}'  Color: '{}'", form.brand, form.color)
            }
            Command::Clear => {
                session.clear();
                "Fields cleared".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
        };

        Reply::Message(message)
    }

    fn fill(session: &mut Session, pair: Option<(String, String)>) {
        if let Some((brand, color)) = pair {
            session.set_brand(&brand);
            session.set_color(&color);
        }
    }
}

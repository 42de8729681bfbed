use std::fmt;

/// Separator between brand and color in an inline pair, e.g. `add Citadel / Mephiston Red`.
pub const PAIR_SEPARATOR: char = '/';

/// A console line split into its command word and the remaining argument text.
#[derive(Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub word: String,
    pub rest: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParserError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    MalformedPair,
}

// Implement Display for ParserError
impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::UnknownCommand(word) => {
                write!(f, "Unknown command '{}'. Type 'help' for a list of commands.", word)
            }
            ParserError::MissingArgument(what) => write!(f, "Missing {}", what),
            ParserError::UnexpectedArgument(word) => {
                write!(f, "'{}' does not take an argument", word)
            }
            ParserError::MalformedPair => {
                write!(f, "Expected 'brand {} color'", PAIR_SEPARATOR)
            }
        }
    }
}

// Implement Error for ParserError
impl std::error::Error for ParserError {}

pub struct Parser {}

impl Parser {
    /// Splits a line at the first run of whitespace. Returns `None` for blank lines.
    ///
    /// The command word is lowercased; the argument keeps its case and inner
    /// spacing but loses surrounding whitespace.
    pub fn parse(input: &str) -> Option<Line<'_>> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let (word, rest) = match input.find(char::is_whitespace) {
            Some(index) => (&input[..index], input[index..].trim_start()),
            None => (input, ""),
        };

        Some(Line {
            word: word.to_lowercase(),
            rest,
        })
    }

    /// Splits `brand / color`. Either side may be empty; validation happens later.
    pub fn parse_pair(rest: &str) -> Result<(String, String), ParserError> {
        let (brand, color) = rest
            .split_once(PAIR_SEPARATOR)
            .ok_or(ParserError::MalformedPair)?;

        if color.contains(PAIR_SEPARATOR) {
            return Err(ParserError::MalformedPair);
        }

        Ok((brand.trim().to_string(), color.trim().to_string()))
    }
}

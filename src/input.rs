use log::debug;

use crate::alphabet::Category;
use crate::config;
use crate::error::{Error, Result};

/// One line typed into the session.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Toggle(Category),
    Length(usize),
    Count(usize),
    Generate,
    Copy(usize),
    Alphabet,
    Show,
    Help,
    Quit,
    Nothing,
}

pub fn parse(line: &str) -> Result<Action> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Action::Nothing);
    };
    let fn_number = |arg: Option<&str>| -> Result<usize> {
        config::parse_number(arg.unwrap_or_default())
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "length" | "l" => Action::Length(fn_number(words.next())?),
        "count"  | "n" => Action::Count(fn_number(words.next())?),
        "generate" | "g" => Action::Generate,
        "copy"   | "c" => Action::Copy(fn_number(words.next())?),
        "alphabet" | "a" => Action::Alphabet,
        "show"   | "s" => Action::Show,
        "help"   | "h" | "?" => Action::Help,
        "quit"   | "q" | "exit" => Action::Quit,
        other => match other.parse::<usize>().ok().and_then(Category::from_number) {
            Some(category) => Action::Toggle(category),
            None => return Err(Error::UnknownCommand(other.to_string())),
        },
    };
    debug!("parsed {:?} from {:?}", action, line.trim());
    Ok(action)
}

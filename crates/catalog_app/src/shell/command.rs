use catalog_core::{DropdownInput, DropdownKey, Msg, RecordId};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search <text>        filter by name, number or type (empty clears)
  type <category|->    show one type, '-' for all
  more                 reveal the next page of results
  next | prev          page forward or back
  page <n>             jump to page n
  select <id>          open the detail view for a record
  close                close the detail view
  toggle               open or close the type menu
  key <name>           send enter, space, up, down, home, end or escape to the menu
  pick <n>             click option n of the open menu
  help                 show this text
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?} (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim_end(), ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" => return Err(ParseError::Empty),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        // Case is kept; the filter normalizes the term.
        "search" => Msg::SearchInput(rest.to_string()),
        "type" => match rest {
            "" => return Err(ParseError::MissingArgument("type")),
            "-" => Msg::CategorySelected(String::new()),
            category => Msg::CategorySelected(category.to_string()),
        },
        "more" => Msg::LoadMoreRequested,
        "next" => Msg::PageNext,
        "prev" => Msg::PagePrev,
        "page" => Msg::PageRequested(number(rest, "page")?),
        "select" => Msg::ItemSelected(number::<RecordId>(rest, "select")?),
        "close" => Msg::DetailClosed,
        "toggle" => Msg::Dropdown(DropdownInput::TriggerClicked),
        "pick" => Msg::Dropdown(DropdownInput::ItemClicked(number(rest, "pick")?)),
        "key" => Msg::Dropdown(DropdownInput::Key(key(rest)?)),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn number<N: std::str::FromStr>(arg: &str, command: &'static str) -> Result<N, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

fn key(arg: &str) -> Result<DropdownKey, ParseError> {
    let key = match arg.to_ascii_lowercase().as_str() {
        "" => return Err(ParseError::MissingArgument("key")),
        "enter" => DropdownKey::Enter,
        "space" => DropdownKey::Space,
        "up" => DropdownKey::ArrowUp,
        "down" => DropdownKey::ArrowDown,
        "home" => DropdownKey::Home,
        "end" => DropdownKey::End,
        "escape" | "esc" => DropdownKey::Escape,
        _ => return Err(ParseError::UnknownKey(arg.to_string())),
    };
    Ok(key)
}

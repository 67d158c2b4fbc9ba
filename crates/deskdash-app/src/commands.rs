//! One-line command language read from stdin.

use deskdash_common::types::{WindowAction, WindowId};
use deskdash_windows::WindowCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Window(WindowCommand),
    Show,
    Menu,
    Content(WindowId),
    Activity,
    Clear,
    Url,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a window id")]
    MissingId(&'static str),

    #[error("`{0}` takes exactly one window id")]
    TooManyArgs(&'static str),

    #[error("`{0}` takes no arguments")]
    UnexpectedArgs(&'static str),
}

pub const HELP: &str = "\
Commands:
  open <id>       open or focus a window (sidebar click)
  minimize <id>   minimize a window
  maximize <id>   toggle maximize
  close <id>      close a window
  restore <id>    restore a minimized window
  show            print the desktop
  menu            list sidebar items
  content <id>    show a window's content
  activity        show received webhook requests
  clear           clear the activity feed
  url             generate a listener URL
  help            this message
  quit            exit";

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(ParseError::Empty);
    };
    let arg = parts.next();
    let extra = parts.next().is_some();

    let verb = verb.to_ascii_lowercase();
    let command = match verb.as_str() {
        "open" | "click" => Command::Window(WindowCommand::MenuClick(id("open", arg, extra)?)),
        "minimize" | "min" => window_action("minimize", WindowAction::Minimize, arg, extra)?,
        "maximize" | "max" => window_action("maximize", WindowAction::Maximize, arg, extra)?,
        "close" => window_action("close", WindowAction::Close, arg, extra)?,
        "restore" => Command::Window(WindowCommand::Restore(id("restore", arg, extra)?)),
        "content" => Command::Content(id("content", arg, extra)?),
        "show" => bare("show", Command::Show, arg)?,
        "menu" => bare("menu", Command::Menu, arg)?,
        "activity" => bare("activity", Command::Activity, arg)?,
        "clear" => bare("clear", Command::Clear, arg)?,
        "url" => bare("url", Command::Url, arg)?,
        "help" | "?" => bare("help", Command::Help, arg)?,
        "quit" | "exit" => bare("quit", Command::Quit, arg)?,
        _ => return Err(ParseError::Unknown(verb)),
    };
    Ok(command)
}

fn id(verb: &'static str, arg: Option<&str>, extra: bool) -> Result<WindowId, ParseError> {
    if extra {
        return Err(ParseError::TooManyArgs(verb));
    }
    arg.map(WindowId::from).ok_or(ParseError::MissingId(verb))
}

fn window_action(
    verb: &'static str,
    action: WindowAction,
    arg: Option<&str>,
    extra: bool,
) -> Result<Command, ParseError> {
    let id = id(verb, arg, extra)?;
    Ok(Command::Window(WindowCommand::Action(id, action)))
}

fn bare(verb: &'static str, command: Command, arg: Option<&str>) -> Result<Command, ParseError> {
    match arg {
        Some(_) => Err(ParseError::UnexpectedArgs(verb)),
        None => Ok(command),
    }
}

//! Console adapter: line parsing and terminal output

use crate::dashboard::{Command, Notice, NoticeKind, Notifier, PageView, Renderer};
use crate::types::RecordId;
use std::fmt::Write as _;

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Dispatch straight to the dashboard
    Command(Command),
    /// Edit needs a title and body prompted from the user
    Edit(RecordId),
    /// Redraw the current page
    Show,
    /// Print usage
    Help,
    /// Exit the console
    Quit,
    /// Blank line
    Empty,
}

/// Console usage text
pub const HELP: &str = "\
Commands:
  load                   fetch all products
  search <text>          search products
  next | prev            change page
  add <title> | <body>   create a product
  edit <id>              edit a product
  delete <id>            delete a product
  show                   redraw the current page
  help                   show this help
  quit                   exit";

/// Parse one line of console input
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "load" => Ok(Input::Command(Command::Load)),
        "next" | "n" => Ok(Input::Command(Command::NextPage)),
        "prev" | "p" => Ok(Input::Command(Command::PrevPage)),
        "search" | "s" => Ok(Input::Command(Command::Search(rest.to_string()))),
        "add" => {
            let (title, body) = match rest.split_once('|') {
                Some((title, body)) => (title.trim(), body.trim()),
                None => (rest, ""),
            };
            Ok(Input::Command(Command::Create {
                title: Some(title.to_string()),
                body: Some(body.to_string()),
            }))
        }
        "edit" => parse_id(rest).map(Input::Edit),
        "delete" | "del" | "rm" => parse_id(rest).map(|id| Input::Command(Command::Delete(id))),
        "show" | "ls" => Ok(Input::Show),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        other => Err(format!("Unknown command '{other}' (try 'help')")),
    }
}

fn parse_id(text: &str) -> Result<RecordId, String> {
    text.parse()
        .map_err(|_| format!("Expected a product id, got '{text}'"))
}

/// Format a page for the terminal
pub fn format_page(view: &PageView) -> String {
    let mut out = String::new();
    if view.records.is_empty() {
        out.push_str("  (no products)\n");
    }
    for record in &view.records {
        let _ = writeln!(out, "  [{}] {}", record.id, record.title);
        let _ = writeln!(out, "      {}", record.body.replace('\n', " "));
    }
    let _ = write!(
        out,
        "{} of {} ({} products)",
        view.label, view.max_page, view.total
    );
    out
}

/// Prints pages to stdout
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, view: &PageView) {
        println!("{}", format_page(view));
    }
}

/// Prints notices; errors go to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Error => eprintln!("{}", notice.message),
        }
    }
}

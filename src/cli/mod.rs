//! CLI module
//!
//! Terminal front-end for the dashboard.
//!
//! # Commands
//!
//! The console reads one command per line from stdin:
//!
//! - `load` - Fetch all products
//! - `search <text>` - Debounced search
//! - `next` / `prev` - Page navigation
//! - `add <title> | <body>` - Create a product
//! - `edit <id>` - Prompt for a new title and body
//! - `delete <id>` - Delete a product
//! - `show` - Redraw the current page
//! - `quit` - Exit

mod commands;
mod console;
mod runner;

pub use commands::Cli;
pub use console::{
    format_page, parse_line, ConsoleNotifier, ConsoleRenderer, Input, HELP,
};
pub use runner::{run_console, Runner};

//! CLI runner - wires the dashboard to the console

use crate::api::RestProductApi;
use crate::cli::commands::Cli;
use crate::cli::console::{
    format_page, parse_line, ConsoleNotifier, ConsoleRenderer, Input, HELP,
};
use crate::dashboard::{Command, Dashboard};
use crate::error::Result;
use crate::http::HttpClient;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the dashboard and run the interactive console on stdin
    pub async fn run(&self) -> Result<()> {
        let config = self.cli.resolve_config()?;
        info!(
            "Using {}/{} (page size {})",
            config.base_url.trim_end_matches('/'),
            config.resource,
            config.page_size
        );

        let client = HttpClient::with_config(config.http_config())?;
        let api = RestProductApi::new(client, &config.resource);
        let dashboard = Dashboard::new(
            Arc::new(api),
            Arc::new(ConsoleRenderer),
            Arc::new(ConsoleNotifier),
            config.dashboard_options()?,
        );

        println!("{HELP}");
        if self.cli.load {
            if let Err(e) = dashboard.load().await {
                debug!("Initial load failed: {}", e);
            }
        }

        run_console(&dashboard, BufReader::new(tokio::io::stdin())).await
    }
}

/// Read commands from `reader` until `quit` or end of input
///
/// Dashboard errors have already been shown to the user and do not stop the
/// loop. A search still waiting out its debounce window when input ends is
/// allowed to complete.
pub async fn run_console<R>(dashboard: &Dashboard, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match input {
            Input::Command(command) => {
                if let Err(e) = dashboard.dispatch(command).await {
                    debug!("Command failed: {}", e);
                }
            }
            Input::Edit(id) => {
                println!("Enter new title:");
                let title = lines.next_line().await?;
                println!("Enter new body:");
                let body = lines.next_line().await?;
                if let Err(e) = dashboard.dispatch(Command::Edit { id, title, body }).await {
                    debug!("Command failed: {}", e);
                }
            }
            Input::Show => {
                let view = dashboard.view().await;
                println!("{}", format_page(&view));
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
            Input::Empty => {}
        }
    }

    dashboard.settle().await;
    Ok(())
}

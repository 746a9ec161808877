use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rollcall_service::DEFAULT_DATA_PATH;
use rollcall_tui::TuiConfig;

/// Look up voters in a static record list.
#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON file holding the record array.
    #[arg(long, global = true, env = "ROLLCALL_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Heading shown above the search box.
    #[arg(long, global = true, env = "ROLLCALL_TITLE")]
    pub title: Option<String>,

    /// Terminal width at which results switch from cards to a table.
    #[arg(long, global = true, env = "ROLLCALL_BREAKPOINT")]
    pub breakpoint: Option<u16>,

    /// Where the browser writes its log (defaults to the temp directory).
    #[arg(long, global = true, env = "ROLLCALL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn tui_config(&self) -> TuiConfig {
        let mut config = TuiConfig::default();
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(breakpoint) = self.breakpoint {
            config.breakpoint = breakpoint;
        }
        config
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("rollcall.log"))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive browser (default).
    Browse,

    /// Print matching records and exit.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in the ID, name and NIC fields.
    pub query: String,

    /// Print every match instead of the first 50.
    #[arg(long)]
    pub all: bool,

    /// Print matches as a JSON array.
    #[arg(long)]
    pub json: bool,
}

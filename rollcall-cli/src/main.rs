mod args;
mod commands;
mod logging;
mod output;

use args::{Cli, Command};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => commands::browse::execute(&cli.options).await,
        Command::Search(args) => commands::search::execute(&cli.options, args).await,
    }
}

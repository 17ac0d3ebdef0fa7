pub mod log;
pub mod projects;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log time to Teamwork from a CSV export", arg_required_else_help = true)]
    Log(log::LogArgs),
    #[command(about = "List configured projects and tasks")]
    Projects,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(short, long, global = true, help = "Path to the configuration file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Log(args) => log::cmd(args, cli.config).await,
            Commands::Projects => projects::cmd(cli.config),
        }
    }
}

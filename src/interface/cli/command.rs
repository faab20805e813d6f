//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::review::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "dogpost")]
#[command(about = "Post inline review comments to a GitHub PR, skipping ones already posted")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PR URL
    url: Option<String>,

    /// JSON Lines comment file (default: stdin)
    #[arg(long, short = 'f')]
    input: Option<PathBuf>,

    /// Tool name for comments without one
    #[arg(long)]
    name: Option<String>,

    /// Print comment bodies to stdout, do not post
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and token sources
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    Post(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig),
            None => {
                let Some(url) = self.url else {
                    return Err("PR URL is required (or use the `config` subcommand)".to_string());
                };

                Ok(CliAction::Post(RunOptions {
                    url,
                    input: self.input,
                    tool_name: self.name,
                    dry_run: self.dry_run,
                }))
            }
        }
    }
}

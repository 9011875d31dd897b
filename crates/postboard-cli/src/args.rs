use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use postboard_types::PostId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(about = "Browse, create, update and delete posts on a GraphQL API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GraphQL endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Config file path (default: $POSTBOARD_PATH/config.toml or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file (the only log sink while the TUI is running)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive post board (default)
    Tui,

    /// Print the latest posts
    List {
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        body: String,
    },

    /// Update a post; omitted fields keep their current value
    Update {
        id: PostId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        body: Option<String>,
    },

    /// Delete a post
    Delete { id: PostId },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file if none exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["postboard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "postboard",
            "list",
            "--limit",
            "3",
            "--endpoint",
            "http://localhost/api",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost/api"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::List { limit: Some(3) })));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        assert!(Cli::try_parse_from(["postboard", "delete", " "]).is_err());
    }
}

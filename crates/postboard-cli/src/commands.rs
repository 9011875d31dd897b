use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui);

    let log_target = match (&command, &cli.log_file) {
        (_, Some(path)) => LogTarget::File(path.clone()),
        (Commands::Tui, None) => LogTarget::Discard,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(cli.log_level, &log_target)?;

    let ctx = ExecutionContext::new(cli.config.as_deref(), cli.endpoint, cli.format)?;

    match command {
        Commands::Tui => handlers::tui::handle(&ctx),

        Commands::List { limit } => handlers::list::handle(&ctx, limit),

        Commands::Create { title, body } => handlers::create::handle(&ctx, title, body),

        Commands::Update { id, title, body } => handlers::update::handle(&ctx, id, title, body),

        Commands::Delete { id } => handlers::delete::handle(&ctx, id),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init => handlers::config::init(&ctx),
        },
    }
}

use clap::Parser;
use sea_orm_cli::MigrateSubcommands;

/// Storefront schema migration runner.
///
/// Without a subcommand, pending migrations are applied.
#[derive(Parser)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Option<MigrateSubcommands>,
}

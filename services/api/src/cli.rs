use crate::lookup::{run_resolve, ResolveArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use whisky_catalog::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Whisky Catalog",
    about = "Serve and query the whisky catalog producer resolver",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a distiller or bottler name against the catalog and print the result
    Resolve(ResolveArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Producer catalog CSV (kind,name,active,merged_into); defaults to the built-in seed
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Resolve(args) => run_resolve(args),
    }
}

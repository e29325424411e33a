mod cli;
mod infra;
mod lookup;
mod routes;
mod server;

use whisky_catalog::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

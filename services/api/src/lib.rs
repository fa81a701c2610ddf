mod cli;
mod infra;
mod routes;
mod server;
mod template;

use ecomap::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use pragmatic_ux::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

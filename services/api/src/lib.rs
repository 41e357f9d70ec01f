mod cli;
mod forecast;
mod infra;
mod routes;
mod server;

use spooky_predictor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

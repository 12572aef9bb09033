mod cli;
mod generate;
mod infra;
mod routes;
mod server;

use fantasy_salary::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

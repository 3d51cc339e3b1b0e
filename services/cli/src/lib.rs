mod cli;
mod demo;
mod render;
mod session;

use applyform::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

use fmeta_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Log to the state dir when possible; never crash over logging.
    if logging::init_file_logging().is_err() {
        logging::init_stderr_logging();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("fmeta error: {:#}", err);
        std::process::exit(1);
    }
}

mod cli;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();

    logging::init(
        matches.get_count("verbose"),
        matches
            .get_one::<String>("log-format")
            .is_some_and(|f| f == "json"),
    );

    match cli::dispatch(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

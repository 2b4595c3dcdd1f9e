// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the client, hand over to `run`.
// - Per-file failures are handled inside `run`; only a bad root path changes
//   the exit status.

use clap::Parser;
use pixeldrain_upload::{
    api::PixeldrainClient, cli::RunConfiguration, error::Error, logger::init_logger, run::run, ui,
};

fn main() -> anyhow::Result<()> {
    let config = RunConfiguration::parse();
    init_logger();
    log::debug!("starting with {config:?}");

    // Base URL comes from `PIXELDRAIN_URL`, see `api::PixeldrainClient::from_env`.
    let client = PixeldrainClient::from_env(&config.api_key).map_err(Error::Client)?;

    match run(&client, &config) {
        Ok(_) => Ok(()),
        Err(err @ Error::InvalidRootPath(_)) => {
            ui::error(&format!("Error: {err}"));
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

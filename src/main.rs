extern crate clap;
extern crate tokio;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use lexsift_repo::{cli::Cli, config::Config, engine::Engine, error::Error, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            eprintln!("lexsift: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    cli.apply(&mut config);

    let summary = Engine::new(config).run(&cli.transcript).await?;
    info!(
        unknown = summary.words.len(),
        output = %summary.output.display(),
        "done"
    );

    Ok(())
}

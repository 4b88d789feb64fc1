//! Entry point: parse CLI, run the scrape, print the report.

use std::process::ExitCode;

use clap::Parser;
use powerrankings::{
    cli::PowerRankings,
    commands::{handle_rankings, RankingsParams},
    core::AppConfig,
    logging, PrError,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = PowerRankings::parse();
    logging::init(app.verbose);

    let config = AppConfig::resolve(app.data_dir);
    let params = RankingsParams {
        league: app.league,
        week: app.week,
        force: app.force,
        replay: app.replay,
        strict_replay: app.strict_replay,
        out_file: app.out_file,
    };

    match handle_rankings(&config, params).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<PrError>()
                .map_or(1, PrError::exit_code);
            ExitCode::from(code)
        }
    }
}

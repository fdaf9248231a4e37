use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use geocollide::fixture::Fixture;
use geocollide::grading::{grade_fixture, GradingConfig};
use log::{error, info};

/// Grades the collision predicates against the expected results of a fixture file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Fixture file holding the five groups of trials
    fixture: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let fixture = match Fixture::load(&cli.fixture) {
        Ok(fixture) => fixture,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "grading {} trials from {}",
        fixture.groups.iter().map(|g| g.trials.len()).sum::<usize>(),
        cli.fixture.display()
    );

    let report = grade_fixture(&fixture, &GradingConfig::default());
    print!("{}", report);
    ExitCode::SUCCESS
}

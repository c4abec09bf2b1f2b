use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use train_finder::dataset::{DEFAULT_DATA_PATH, DatasetConfig, JsonFileSource};
use train_finder::finder::{FinderConfig, TrainFinder};
use train_finder::present::write_trains;
use train_finder::prompt::{ARRIVAL_PROMPT, CRITERIA_PROMPT, DEPARTURE_PROMPT, ask_unless_given};

/// Find the best trains between two stations.
///
/// Any value not given on the command line is asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "train-finder", version)]
struct Args {
    /// Path to the JSON timetable
    #[arg(long, env = "TRAIN_FINDER_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Departure station id
    #[arg(long, allow_hyphen_values = true)]
    departure: Option<String>,

    /// Arrival station id
    #[arg(long, allow_hyphen_values = true)]
    arrival: Option<String>,

    /// Sort key: price, arrival-time or departure-time
    #[arg(long)]
    criteria: Option<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    let departure = ask_unless_given(args.departure, &mut input, &mut stdout, DEPARTURE_PROMPT)?;
    let arrival = ask_unless_given(args.arrival, &mut input, &mut stdout, ARRIVAL_PROMPT)?;
    let criteria = ask_unless_given(args.criteria, &mut input, &mut stdout, CRITERIA_PROMPT)?;

    let finder = TrainFinder::new(
        JsonFileSource::new(DatasetConfig::new(args.data)),
        FinderConfig::default(),
    );
    let trains = finder.lookup(&departure, &arrival, &criteria)?;

    write_trains(&mut stdout, &trains)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["train-finder"]).unwrap();

        // TRAIN_FINDER_DATA may be set in the environment running the tests
        if std::env::var_os("TRAIN_FINDER_DATA").is_none() {
            assert_eq!(args.data, PathBuf::from("data.json"));
        }
        assert!(args.departure.is_none());
        assert!(args.arrival.is_none());
        assert!(args.criteria.is_none());
    }

    #[test]
    fn non_interactive_flags() {
        let args = Args::try_parse_from([
            "train-finder",
            "--data",
            "/tmp/trains.json",
            "--departure",
            "1",
            "--arrival",
            "2",
            "--criteria",
            "price",
        ])
        .unwrap();

        assert_eq!(args.data, PathBuf::from("/tmp/trains.json"));
        assert_eq!(args.departure.as_deref(), Some("1"));
        assert_eq!(args.arrival.as_deref(), Some("2"));
        assert_eq!(args.criteria.as_deref(), Some("price"));
    }

    #[test]
    fn negative_station_reaches_validation() {
        let args =
            Args::try_parse_from(["train-finder", "--departure", "-1", "--arrival", "2"]).unwrap();
        assert_eq!(args.departure.as_deref(), Some("-1"));
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::{League, WeekId};

/// Scrape ESPN power rankings into a per-league history and print one week as CSV.
#[derive(Debug, Parser)]
#[clap(name = "powerrankings", about = "ESPN weekly power rankings scraper")]
pub struct PowerRankings {
    /// League name: nba | nhl (case-insensitive).
    #[clap(long, short)]
    pub league: League,

    /// Week to export. Defaults to the current week.
    #[clap(long, short)]
    pub week: Option<WeekId>,

    /// Re-parse weeks that are already stored.
    #[clap(long, short)]
    pub force: bool,

    /// Re-run the last scrape from the recorded fetch log instead of the network.
    #[clap(long, short)]
    pub replay: bool,

    /// Fail when a replayed fetch was recorded for a different URL.
    #[clap(long, requires = "replay")]
    pub strict_replay: bool,

    /// Directory holding the season databases and fetch logs.
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr.
    #[clap(long, short)]
    pub verbose: bool,

    /// Write the report here instead of stdout.
    pub out_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = PowerRankings::try_parse_from(["powerrankings", "-l", "NBA"]).unwrap();
        assert_eq!(args.league, League::NBA);
        assert!(args.week.is_none());
        assert!(!args.force);
        assert!(!args.replay);
        assert!(args.out_file.is_none());
    }

    #[test]
    fn test_all_args() {
        let args = PowerRankings::try_parse_from([
            "powerrankings",
            "-l",
            "nhl",
            "-w",
            "Camp",
            "-f",
            "-r",
            "--strict-replay",
            "--data-dir",
            "/tmp/pr",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(args.league, League::NHL);
        assert_eq!(args.week, Some(WeekId::from("Camp")));
        assert!(args.force);
        assert!(args.replay);
        assert!(args.strict_replay);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/pr")));
        assert_eq!(args.out_file, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_league_is_required() {
        assert!(PowerRankings::try_parse_from(["powerrankings"]).is_err());
    }

    #[test]
    fn test_unknown_league_rejected() {
        assert!(PowerRankings::try_parse_from(["powerrankings", "-l", "mlb"]).is_err());
    }

    #[test]
    fn test_strict_replay_requires_replay() {
        assert!(
            PowerRankings::try_parse_from(["powerrankings", "-l", "nba", "--strict-replay"])
                .is_err()
        );
    }

    #[test]
    fn test_single_output_file_only() {
        assert!(PowerRankings::try_parse_from(["powerrankings", "-l", "nba", "a.csv", "b.csv"])
            .is_err());
    }
}

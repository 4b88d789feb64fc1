//! Supported leagues.

use crate::error::PrError;
use std::fmt;
use std::str::FromStr;

/// Leagues with a power-rankings scraper.
///
/// Parsing is case-insensitive; display uses the upper-case code that also
/// names the league's files and report column.
///
/// ```rust
/// use powerrankings::League;
///
/// let league: League = "nba".parse().unwrap();
/// assert_eq!(league, League::NBA);
/// assert_eq!(league.to_string(), "NBA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    NBA,
    NHL,
}

impl League {
    pub fn code(&self) -> &'static str {
        match self {
            League::NBA => "NBA",
            League::NHL => "NHL",
        }
    }

    pub fn all() -> [League; 2] {
        [League::NBA, League::NHL]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for League {
    type Err = PrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nba" => Ok(League::NBA),
            "nhl" => Ok(League::NHL),
            _ => Err(PrError::UnknownLeague {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("NBA".parse::<League>().unwrap(), League::NBA);
        assert_eq!("Nhl".parse::<League>().unwrap(), League::NHL);
        assert_eq!(" nhl ".parse::<League>().unwrap(), League::NHL);
    }

    #[test]
    fn test_unknown_league() {
        let err = "mlb".parse::<League>().unwrap_err();
        assert!(matches!(err, PrError::UnknownLeague { ref name } if name == "mlb"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_display_round_trip() {
        for league in League::all() {
            assert_eq!(league.to_string().parse::<League>().unwrap(), league);
        }
    }
}

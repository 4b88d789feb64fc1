//! Week identifiers and their ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque identifier for a ranking period.
///
/// Usually numeric (`"1"`, `"12"`), sometimes a literal label such as
/// `"Camp"` for the preseason edition.
///
/// Weeks order by the following rule: any non-numeric id sorts before any
/// numeric id, non-numeric ids compare lexically, numeric ids compare by value.
///
/// ```rust
/// use powerrankings::WeekId;
///
/// let mut weeks: Vec<WeekId> = ["10", "Camp", "2", "1"].into_iter().map(WeekId::from).collect();
/// weeks.sort();
/// let ids: Vec<&str> = weeks.iter().map(|w| w.as_str()).collect();
/// assert_eq!(ids, ["Camp", "1", "2", "10"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekId(String);

impl WeekId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a number.
    pub fn number(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn is_numeric(&self) -> bool {
        self.number().is_some()
    }
}

impl Ord for WeekId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            // "01" and "1" share a value; fall back to text to stay consistent with Eq
            (Some(l), Some(r)) => l.cmp(&r).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for WeekId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WeekId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for WeekId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WeekId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

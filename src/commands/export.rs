//! Week report rendering

use crate::{storage::SeasonStore, PrError, Result, WeekId};

/// Column names of every report
pub const HEADER: [&str; 4] = ["league", "week", "team", "rank"];

/// Header plus one row per ranking entry of `week`, in ascending rank order.
pub fn export_rows(store: &SeasonStore, week: &WeekId) -> Result<Vec<Vec<String>>> {
    let record = store
        .get_week(week)
        .ok_or_else(|| PrError::not_found(format!("week '{week}'")))?;

    let mut rows = Vec::with_capacity(record.rankings.len() + 1);
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());
    for entry in &record.rankings {
        rows.push(vec![
            store.league().to_string(),
            week.to_string(),
            entry.team.clone(),
            entry.rank.to_string(),
        ]);
    }
    Ok(rows)
}

/// The week's report as CSV text.
pub fn export_csv(store: &SeasonStore, week: &WeekId) -> Result<String> {
    let rows = export_rows(store, week)?;
    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    Ok(out)
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{RankEntry, WeekRecord};
    use crate::{ErrorKind, League};

    fn store_with_week() -> SeasonStore {
        let mut store = SeasonStore::in_memory(League::NBA);
        store.upsert(WeekRecord::new(
            WeekId::from("17"),
            "2017-03-06 10:00:00",
            vec![
                RankEntry::new("San Antonio Spurs", 2),
                RankEntry::new("Golden State Warriors", 1),
                RankEntry::new("Houston Rockets", 3),
            ],
        ));
        store
    }

    #[test]
    fn test_rows_are_header_then_ranks_ascending() {
        let rows = export_rows(&store_with_week(), &WeekId::from("17")).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], HEADER);
        assert_eq!(rows[1], ["NBA", "17", "Golden State Warriors", "1"]);
        assert_eq!(rows[2], ["NBA", "17", "San Antonio Spurs", "2"]);
        assert_eq!(rows[3], ["NBA", "17", "Houston Rockets", "3"]);
    }

    #[test]
    fn test_unknown_week_is_not_found() {
        let err = export_rows(&store_with_week(), &WeekId::from("3")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "week '3' not found");
        assert!(export_csv(&store_with_week(), &WeekId::from("3")).is_err());
    }

    #[test]
    fn test_csv_text() {
        let csv = export_csv(&store_with_week(), &WeekId::from("17")).unwrap();

        assert_eq!(
            csv,
            "league,week,team,rank\n\
             NBA,17,Golden State Warriors,1\n\
             NBA,17,San Antonio Spurs,2\n\
             NBA,17,Houston Rockets,3\n"
        );
    }

    #[test]
    fn test_empty_week_exports_header_only() {
        let mut store = SeasonStore::in_memory(League::NHL);
        store.upsert(WeekRecord::new(WeekId::from("170306"), "2017-03-06 10:00:00", vec![]));

        let csv = export_csv(&store, &WeekId::from("170306")).unwrap();
        assert_eq!(csv, "league,week,team,rank\n");
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("St. Louis, MO"), "\"St. Louis, MO\"");
        assert_eq!(csv_field("the \"Bolts\""), "\"the \"\"Bolts\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }
}

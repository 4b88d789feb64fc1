//! Season store persistence through the public API

use powerrankings::{
    storage::{RankEntry, SeasonStore, WeekRecord},
    League, WeekId,
};
use tempfile::TempDir;

fn week(id: &str, teams: &[(&str, u32)]) -> WeekRecord {
    WeekRecord::new(
        WeekId::from(id),
        "2017-03-06 10:00:00",
        teams
            .iter()
            .map(|(team, rank)| RankEntry::new(*team, *rank))
            .collect(),
    )
}

#[test]
fn test_missing_document_creates_empty_baseline() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db").join("NHL.json");

    let store = SeasonStore::load(&path, League::NHL).unwrap();

    assert!(path.exists());
    assert_eq!(store.league(), "NHL");
    assert!(store.weeks().is_empty());
    assert!(store.latest_week().is_none());
}

#[test]
fn test_saved_season_reloads_in_week_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("NBA.json");

    let mut store = SeasonStore::load(&path, League::NBA).unwrap();
    store.upsert(week("10", &[("Golden State Warriors", 1)]));
    store.upsert(week("2", &[("Cleveland Cavaliers", 1)]));
    store.upsert(week("Camp", &[("Cleveland Cavaliers", 1)]));
    store.upsert(week("1", &[("Golden State Warriors", 1)]));
    store.save().unwrap();

    let reloaded = SeasonStore::load(&path, League::NBA).unwrap();
    let ids: Vec<String> = reloaded.week_ids().iter().map(WeekId::to_string).collect();
    assert_eq!(ids, ["Camp", "1", "2", "10"]);
    assert_eq!(reloaded.latest_week().unwrap().week, WeekId::from("10"));
    assert_eq!(reloaded.season(), store.season());
}

#[test]
fn test_repeated_upsert_keeps_one_record_per_week() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("NBA.json");
    let mut store = SeasonStore::load(&path, League::NBA).unwrap();

    assert!(!store.upsert(week("3", &[("Old", 1)])));
    assert!(store.upsert(week("3", &[("New B", 2), ("New A", 1)])));
    store.save().unwrap();

    let reloaded = SeasonStore::load(&path, League::NBA).unwrap();
    assert_eq!(reloaded.weeks().len(), 1);
    assert_eq!(
        reloaded.get_week(&WeekId::from("3")).unwrap().rankings,
        vec![RankEntry::new("New A", 1), RankEntry::new("New B", 2)]
    );
}

#[test]
fn test_document_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("NHL.json");
    let mut store = SeasonStore::load(&path, League::NHL).unwrap();
    store.upsert(week("170306", &[("Washington Capitals", 1)]));
    store.save().unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["league"], "NHL");
    assert_eq!(doc["weeks"][0]["week"], "170306");
    assert_eq!(doc["weeks"][0]["modified"], "2017-03-06 10:00:00");
    assert_eq!(doc["weeks"][0]["rankings"][0]["team"], "Washington Capitals");
    assert_eq!(doc["weeks"][0]["rankings"][0]["rank"], 1);
}

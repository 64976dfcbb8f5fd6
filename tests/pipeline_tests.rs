//! End-to-end tests for the deduplication run.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;
use topic_dedup::{run_deduplication, Config, Error};

const BASE: &str = "Physics_C_Electricity_and_Magnetism_TopicLookup.json";
const OUTPUT: &str = "NEW_Physics_C_Electricity_and_Magnetism_TopicLookup.json";

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(dir: &Path, name: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join(name)).unwrap()).unwrap()
}

fn config_for(dir: &TempDir) -> Config {
    Config {
        topic_dir: dir.path().to_path_buf(),
        show_progress: false,
        ..Config::default()
    }
}

fn lookup(units: Value) -> Value {
    json!({ "lookupData": { "units": units } })
}

#[test]
fn test_removes_skill_found_in_other_subject() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        BASE,
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }, { "skillCd": "S2" }] }
        ]}])),
    );
    write_json(
        dir.path(),
        "Physics_1_TopicLookup.json",
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }
        ]}])),
    );

    let report = run_deduplication(&config_for(&dir)).unwrap();

    assert_eq!(report.stats.removed_skills, 1);
    assert_eq!(report.entries_seen, 1);
    assert_eq!(
        read_json(dir.path(), OUTPUT),
        lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S2" }] }
        ]}]))
    );
    assert!(report.output_path.ends_with(OUTPUT));
}

#[test]
fn test_fully_duplicated_topic_and_unit_disappear() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        BASE,
        &lookup(json!([
            { "unitCd": "U1", "topics": [{ "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }] },
            { "unitCd": "U2", "topics": [{ "topicCd": "T9", "skills": [{ "skillCd": "S9" }] }] }
        ])),
    );
    write_json(
        dir.path(),
        "Chemistry_TopicLookup.json",
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }
        ]}])),
    );

    let report = run_deduplication(&config_for(&dir)).unwrap();

    assert_eq!(report.stats.units_before, 2);
    assert_eq!(report.stats.units_after, 1);
    assert_eq!(
        read_json(dir.path(), OUTPUT),
        lookup(json!([{ "unitCd": "U2", "topics": [
            { "topicCd": "T9", "skills": [{ "skillCd": "S9" }] }
        ]}]))
    );
}

#[test]
fn test_base_only_copies_units_and_drops_top_level_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let units = json!([{ "unitCd": "U1", "name": "Électricité", "topics": [
        { "topicCd": "T1", "skills": [{ "skillCd": "S1", "weight": 3 }, { "text": "no code" }] }
    ]}]);
    write_json(
        dir.path(),
        BASE,
        &json!({ "subject": "physics", "lookupData": { "units": units } }),
    );

    let report = run_deduplication(&config_for(&dir)).unwrap();

    assert!(report.other_files.is_empty());
    assert_eq!(report.stats.removed_skills, 0);
    assert_eq!(read_json(dir.path(), OUTPUT), lookup(units));

    let raw = fs::read_to_string(dir.path().join(OUTPUT)).unwrap();
    assert!(raw.contains("Électricité"));
    assert!(raw.contains("\n  \"lookupData\""));
}

#[test]
fn test_prior_output_and_bad_sources_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let base = lookup(json!([{ "unitCd": "U1", "topics": [
        { "topicCd": "T1", "skills": [{ "skillCd": "S1" }, { "skillCd": "S2" }] }
    ]}]));
    write_json(dir.path(), BASE, &base);
    // A previous run's output contains everything and must not count as a source
    write_json(dir.path(), OUTPUT, &base);
    fs::write(dir.path().join("Broken_TopicLookup.json"), "{ \"lookupData\": ").unwrap();
    write_json(
        dir.path(),
        "Biology_TopicLookup.json",
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S2" }] }
        ]}])),
    );

    let report = run_deduplication(&config_for(&dir)).unwrap();

    assert_eq!(report.other_files.len(), 2);
    assert_eq!(report.skipped_files.len(), 1);
    assert_eq!(report.stats.removed_skills, 1);
    assert_eq!(
        read_json(dir.path(), OUTPUT),
        lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }
        ]}]))
    );
}

#[test]
fn test_rerun_on_output_removes_nothing_more() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        BASE,
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }, { "skillCd": "S2" }] }
        ]}])),
    );
    write_json(
        dir.path(),
        "Math_TopicLookup.json",
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }
        ]}])),
    );
    let first = run_deduplication(&config_for(&dir)).unwrap();
    let first_output = read_json(dir.path(), OUTPUT);

    let rerun_dir = tempfile::tempdir().unwrap();
    write_json(rerun_dir.path(), BASE, &first_output);
    fs::copy(
        dir.path().join("Math_TopicLookup.json"),
        rerun_dir.path().join("Math_TopicLookup.json"),
    )
    .unwrap();
    let second = run_deduplication(&config_for(&rerun_dir)).unwrap();

    assert_eq!(first.stats.removed_skills, 1);
    assert_eq!(second.stats.removed_skills, 0);
    assert_eq!(read_json(rerun_dir.path(), OUTPUT), first_output);
}

#[test]
fn test_malformed_base_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(BASE), "{ not json").unwrap();

    let err = run_deduplication(&config_for(&dir)).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(!dir.path().join(OUTPUT).exists());
}

#[test]
fn test_missing_base_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "Biology_TopicLookup.json", &lookup(json!([])));

    let err = run_deduplication(&config_for(&dir)).unwrap_err();

    assert!(matches!(err, Error::MissingBaseFile(_)));
    assert!(err.is_input_missing());
    assert!(!dir.path().join(OUTPUT).exists());
}

#[test]
fn test_no_lookup_files_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("physics.json"), "{}").unwrap();
    let config = Config {
        base_filename: "physics.json".to_string(),
        ..config_for(&dir)
    };

    let err = run_deduplication(&config).unwrap_err();

    assert!(matches!(err, Error::NoLookupFiles(_)));
    assert!(!dir.path().join("NEW_physics.json").exists());
}

#[test]
fn test_non_string_codes_do_not_reject_documents() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        BASE,
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": 7 }, { "skillCd": "S1" }, { "skillCd": "S2" }] }
        ]}])),
    );
    write_json(
        dir.path(),
        "Chemistry_TopicLookup.json",
        &lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": 1, "skills": [{ "skillCd": "S2" }] },
            { "topicCd": "T1", "skills": [{ "skillCd": "S1" }] }
        ]}])),
    );

    let report = run_deduplication(&config_for(&dir)).unwrap();

    assert!(report.skipped_files.is_empty());
    assert_eq!(report.entries_seen, 1);
    assert_eq!(report.stats.removed_skills, 1);
    assert_eq!(
        read_json(dir.path(), OUTPUT),
        lookup(json!([{ "unitCd": "U1", "topics": [
            { "topicCd": "T1", "skills": [{ "skillCd": 7 }, { "skillCd": "S2" }] }
        ]}]))
    );
}

#[test]
fn test_output_keeps_base_field_layout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(BASE),
        r#"{"lookupData":{"units":[{"title":"E","topics":[{"skills":[{"label":"x","skillCd":"S2"}],"topicCd":"T1","name":"n"}],"unitCd":null}]}}"#,
    )
    .unwrap();

    run_deduplication(&config_for(&dir)).unwrap();

    let raw = fs::read_to_string(dir.path().join(OUTPUT)).unwrap();
    let compact = serde_json::to_string(&serde_json::from_str::<Value>(&raw).unwrap()).unwrap();
    assert_eq!(
        compact,
        r#"{"lookupData":{"units":[{"title":"E","topics":[{"skills":[{"label":"x","skillCd":"S2"}],"topicCd":"T1","name":"n"}],"unitCd":null}]}}"#
    );
}

use configvars::{storage, ConfigvarsError, Settings, VariableSet};
use serde_json::{json, Value};
use std::fs;

const PROJECT_NAMES: [&str; 3] = ["test_project", "my_flask_website", "my_flask_website.config"];

fn sample_vars() -> VariableSet {
    let mut vars = VariableSet::new();
    vars.insert("SECRET_KEY", "fff9cf72a8a9855ef8ba");
    vars.insert("MAIL_USERNAME", "user@example.com");
    vars.insert("MAIL_PASSWORD", "a1b2c3d4");
    vars.insert("PIN", 9574);
    vars.insert("RATIO", 0.25);
    vars
}

fn scratch() -> (tempfile::TempDir, Settings) {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::new(dir.path(), "{name}.test").expect("settings");
    (dir, settings)
}

#[test]
fn location_follows_the_template() {
    let (dir, settings) = scratch();
    for name in PROJECT_NAMES {
        assert_eq!(storage::location(name, &settings).unwrap(), dir.path().join(format!("{name}.test")));
    }
}

#[test]
fn stored_file_holds_the_json_object() {
    let (_dir, settings) = scratch();
    for name in PROJECT_NAMES {
        let path = storage::store(name, &sample_vars(), &settings).unwrap();
        assert_eq!(path, storage::location(name, &settings).unwrap());
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, Value::Object(sample_vars().into_map()));
    }
}

#[test]
fn store_then_load_round_trips() {
    let (_dir, settings) = scratch();
    storage::store("round.trip", &sample_vars(), &settings).unwrap();
    let loaded = storage::load("round.trip", &settings).unwrap();
    assert_eq!(loaded, sample_vars().into_map());
    assert_eq!(
        loaded.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["SECRET_KEY", "MAIL_USERNAME", "MAIL_PASSWORD", "PIN", "RATIO"]
    );
}

#[test]
fn store_overwrites_previous_content() {
    let (_dir, settings) = scratch();
    storage::store("proj", &sample_vars(), &settings).unwrap();
    let mut replacement = VariableSet::new();
    replacement.insert("ONLY", 1);
    storage::store("proj", &replacement, &settings).unwrap();
    assert_eq!(Value::Object(storage::load("proj", &settings).unwrap()), json!({"ONLY": 1}));
}

#[test]
fn store_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::new(dir.path().join("nested").join("store"), "{name}.json").unwrap();
    storage::store("team/project", &sample_vars(), &settings).unwrap();
    assert!(dir.path().join("nested/store/team/project.json").is_file());
    assert_eq!(storage::load("team/project", &settings).unwrap(), sample_vars().into_map());
}

#[test]
fn empty_variable_sets_are_stored() {
    let (_dir, settings) = scratch();
    storage::store("empty", &VariableSet::new(), &settings).unwrap();
    assert!(storage::load("empty", &settings).unwrap().is_empty());
}

#[test]
fn missing_names_are_not_found() {
    let (_dir, settings) = scratch();
    assert!(matches!(
        storage::load("a3f9c0e1d2b4", &settings),
        Err(ConfigvarsError::NameNotFound(name)) if name == "a3f9c0e1d2b4"
    ));
    assert!(matches!(
        storage::load("no_such_dir/a3f9c0e1d2b4", &settings),
        Err(ConfigvarsError::NameNotFound(_))
    ));
}

#[test]
fn empty_names_are_rejected() {
    let (_dir, settings) = scratch();
    assert!(matches!(
        storage::store("", &sample_vars(), &settings),
        Err(ConfigvarsError::InvalidName(_))
    ));
}

#[test]
fn names_cannot_leave_the_storage_dir() {
    let (dir, settings) = scratch();
    let outside = tempfile::tempdir().unwrap();
    let absolute = outside.path().join("stolen");
    let absolute = absolute.to_str().unwrap();
    for name in [absolute, "../stolen", "team/../../stolen", ".."] {
        assert!(
            matches!(
                storage::store(name, &sample_vars(), &settings),
                Err(ConfigvarsError::InvalidName(rejected)) if rejected == name
            ),
            "{name} was accepted"
        );
        assert!(matches!(storage::load(name, &settings), Err(ConfigvarsError::InvalidName(_))));
    }
    assert_eq!(fs::read_dir(outside.path()).unwrap().count(), 0);
    assert!(!dir.path().parent().unwrap().join("stolen.test").exists());
    // nested relative names stay inside
    assert_eq!(
        storage::location("team/./project", &settings).unwrap(),
        dir.path().join("team/./project.test")
    );
}

#[cfg(target_os = "linux")]
#[test]
fn write_failures_report_the_file() {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }
    let settings = Settings::new("/dev", "{name}").unwrap();
    // larger than the write buffer, so the failing write happens while serializing
    let mut vars = VariableSet::new();
    vars.insert("BLOB", "x".repeat(64 * 1024));
    match storage::store("full", &vars, &settings) {
        Err(ConfigvarsError::Io { path, .. }) => assert_eq!(path, full),
        other => panic!("expected an I/O error for /dev/full, got {other:?}"),
    }
}

#[test]
fn non_object_files_are_corrupt() {
    let (_dir, settings) = scratch();
    fs::write(storage::location("list", &settings).unwrap(), "[1, 2, 3]").unwrap();
    assert!(matches!(
        storage::load("list", &settings),
        Err(ConfigvarsError::DataCorruption { .. })
    ));
    fs::write(storage::location("garbage", &settings).unwrap(), "{not json").unwrap();
    assert!(matches!(storage::load("garbage", &settings), Err(ConfigvarsError::Json(_))));
}

#[test]
fn settings_reject_templates_without_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Settings::new(dir.path(), "vars.json"), Err(ConfigvarsError::Config(_))));
    assert!(matches!(Settings::new(dir.path(), "sub/{name}.json"), Err(ConfigvarsError::Config(_))));
}

#[test]
fn settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("vault");
    let settings_file = dir.path().join("settings.toml");
    fs::write(
        &settings_file,
        format!("storage_dir = {:?}\nfile_name = \"{{name}}.vars\"\n", store_dir.display().to_string()),
    )
    .unwrap();
    let settings = Settings::load_from(Some(&settings_file)).unwrap();
    assert_eq!(settings.storage_dir(), store_dir.as_path());
    assert_eq!(settings.file_name(), "{name}.vars");
    assert_eq!(settings.location("x").unwrap(), store_dir.join("x.vars"));
}

use std::fs;

use whad_inspect::config::DEFAULT_MAX_FRAME_LEN;
use whad_inspect::InspectConfig;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = InspectConfig::from_toml("pretty = false\n").expect("parse config");
    assert!(!config.pretty);
    assert_eq!(config.max_frame_len, DEFAULT_MAX_FRAME_LEN);

    let config = InspectConfig::from_toml("").expect("parse empty config");
    assert_eq!(config, InspectConfig::default());
}

#[test]
fn loads_config_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("whad-inspect.toml");
    fs::write(&path, "max_frame_len = 64\npretty = false\n").expect("write config");

    let config = InspectConfig::load(Some(path.as_path())).expect("load config");
    assert_eq!(config.max_frame_len, 64);
    assert!(!config.pretty);
}

#[test]
fn malformed_config_is_invalid_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "max_frame_len = \"lots\"\n").expect("write config");

    let err = InspectConfig::from_path(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn absent_path_uses_defaults() {
    assert_eq!(InspectConfig::load(None).expect("defaults"), InspectConfig::default());
}

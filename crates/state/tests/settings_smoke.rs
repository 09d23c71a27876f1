use careerpath_state::{load_settings, ReasoningStrategy};
use careerpath_test_utils::{env_guard, set_env_var};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_load_from_home_directory() {
    let _g = env_guard();
    let tmp = tempdir().unwrap();
    let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));
    let _config = set_env_var("CAREERPATH_CONFIG", None);
    let _ttl = set_env_var("CAREERPATH_CACHE_TTL_MS", None);

    let dir = tmp.path().join(".careerpath");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "cache_ttl_ms = 60000\n[reasoning]\nstrategy = \"rotating\"\n",
    )
    .unwrap();

    let settings = load_settings().unwrap();
    assert_eq!(settings.cache_ttl(), Duration::from_millis(60_000));
    assert_eq!(settings.reasoning.strategy, ReasoningStrategy::Rotating);
}

#[test]
fn settings_default_when_no_file() {
    let _g = env_guard();
    let tmp = tempdir().unwrap();
    let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));
    let _config = set_env_var("CAREERPATH_CONFIG", None);

    let settings = load_settings().unwrap();
    assert!(settings.reference_data.is_none());
    assert!(settings.thresholds.course_top_n.is_none());
}

#[test]
fn explicit_config_path_wins() {
    let _g = env_guard();
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("custom.toml");
    std::fs::write(&path, "reference_data = \"/srv/ref.toml\"\n").unwrap();
    let _config = set_env_var("CAREERPATH_CONFIG", Some(path.to_str().unwrap()));
    let _ref = set_env_var("CAREERPATH_REFERENCE_DATA", None);

    let settings = load_settings().unwrap();
    assert_eq!(
        settings.reference_data_path().unwrap().to_str(),
        Some("/srv/ref.toml")
    );
}

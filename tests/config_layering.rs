use lowpayout::config::{AppConfig, ConfigManager};
use std::fs;

// environment overrides are process-wide, so everything touching them lives in one test
#[test]
fn test_defaults_file_then_environment() {
    let dir = tempfile::tempdir().unwrap();

    let defaults = AppConfig::load_layered(None).unwrap();
    assert_eq!(defaults, AppConfig::default());

    let path = dir.path().join("lowpayout.toml");
    fs::write(
        &path,
        "[payout]\nunit_price = 5\ntable = [0, 0, 0, 20, 800, 4000, 10000, 100000]\n\n[search]\nrestart_budget = 50\nmin_four = 1\n",
    )
    .unwrap();

    let from_file = AppConfig::load_layered(Some(path.as_path())).unwrap();
    assert_eq!(from_file.payout.unit_price, 5);
    assert_eq!(from_file.payout.table.get(3), 20);
    assert_eq!(from_file.search.restart_budget, 50);
    assert_eq!(from_file.search.min_four, 1);
    assert_eq!(from_file.search.max_four, 5);

    std::env::set_var("LOWPAYOUT__SEARCH__TOP_K", "3");
    std::env::set_var("LOWPAYOUT__SEARCH__SEED", "99");
    let layered = AppConfig::load_layered(Some(path.as_path())).unwrap();
    std::env::remove_var("LOWPAYOUT__SEARCH__TOP_K");
    std::env::remove_var("LOWPAYOUT__SEARCH__SEED");
    assert_eq!(layered.search.top_k, 3);
    assert_eq!(layered.search.seed, Some(99));
    assert_eq!(layered.search.restart_budget, 50);

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[search]\nmin_four = 9\nmax_four = 2\n").unwrap();
    assert!(AppConfig::load_layered(Some(bad.as_path())).is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let manager = ConfigManager::new();
    manager.update(|c| c.search.restart_budget = 77).unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get().search.restart_budget, 77);
}

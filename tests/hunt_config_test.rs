#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;
use treasure_hunt::utils::validation::Validate;
use treasure_hunt::{CliConfig, DirectionPolicy, HuntConfig, PathFinder, TreasureFinder};

/// 從 TOML 檔案跑完整個尋寶流程
#[test]
fn test_hunt_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("island.toml");

    std::fs::write(
        &config_path,
        r#"
[hunt]
name = "Skull Island"
description = "From the dock to the old oak"
paths = [
    "Walk,60 min,N",
    "Run,1 hour,W",
    "Walk,1 hour,S",
]
"#,
    )?;

    let config = HuntConfig::from_file(&config_path)?;
    config.validate()?;

    let mut finder = TreasureFinder::with_policy(config.direction_policy());
    finder.set_paths(Some(config.paths().to_vec()));

    assert_eq!(finder.find_treasure().as_deref(), Some("6 mile(s) to the West"));
    Ok(())
}

#[test]
fn test_cli_plan_from_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("paths.txt");
    std::fs::write(&input_path, "# start at the well\nWalk,60 min,NW\n\nWalk,60 min,xx\n")?;

    let config = CliConfig::parse_from([
        "treasure-hunt",
        "--input",
        input_path.to_str().unwrap(),
        "--unknown-direction",
        "skip",
    ]);
    config.validate()?;

    let plan = config.plan()?;
    assert_eq!(plan.policy, DirectionPolicy::Skip);

    let mut finder = TreasureFinder::with_policy(plan.policy);
    finder.set_paths(plan.paths);

    let report = finder.follow_paths().expect("paths were configured");
    assert_eq!(report.directions, "2.12 mile(s) to the North, 2.12 mile(s) to the West");
    assert_eq!(report.skipped, 1);
    Ok(())
}

#[test]
fn test_invalid_hunt_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[hunt]\nname = \"broken\"\nunknown_direction = \"up\"\npaths = []\n")?;

    let config = CliConfig::parse_from(["treasure-hunt", "--config", config_path.to_str().unwrap()]);
    let err = config.plan().unwrap_err();
    assert!(err.user_friendly_message().contains("up"));
    Ok(())
}

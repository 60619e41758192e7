use anyhow::Result;
use clap::Arg;
use clap::Command;
use serial_test::serial;
use tempfile::TempDir;

use super::*;

fn command() -> Command {
    Command::new("clou")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the Clouseau API server. [default: http://localhost:8000]"),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Path to the config file."),
        )
        .arg(
            Arg::new("context-window")
                .long("context-window")
                .help("Context window size used for the usage indicator."),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_parser(["auto", "light", "dark"])
                .help("Color theme of the viewer."),
        )
}

#[tokio::test]
#[serial]
async fn test_load_uses_defaults_without_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let config_file = dir.path().join("missing.toml");
    let matches = command().get_matches_from(vec![
        "clou",
        "--config-file",
        config_file.to_str().unwrap(),
    ]);

    Config::load(command(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiUrl), "http://localhost:8000");
    assert_eq!(Config::get(ConfigKey::ContextWindow), "200000");
    assert_eq!(Config::get(ConfigKey::Theme), "auto");
    assert_eq!(Config::get(ConfigKey::SessionID), "");
    assert_eq!(Config::get(ConfigKey::ConfigFile), config_file.to_str().unwrap());

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_load_layers_file_then_args() -> Result<()> {
    let dir = TempDir::new()?;
    let config_file = dir.path().join("config.toml");
    std::fs::write(
        &config_file,
        "api-url = \"http://files.example:9000\"\ncontext-window = 128000\ntheme = \"dark\"\n",
    )?;

    let matches = command().get_matches_from(vec![
        "clou",
        "--config-file",
        config_file.to_str().unwrap(),
        "--api-url",
        "http://args.example:7000",
    ]);

    Config::load(command(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiUrl), "http://args.example:7000");
    assert_eq!(Config::get_u64(ConfigKey::ContextWindow)?, 128_000);
    assert_eq!(Config::get(ConfigKey::Theme), "dark");

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_load_rejects_invalid_possible_value() -> Result<()> {
    let dir = TempDir::new()?;
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "theme = \"neon\"\n")?;

    let matches = command().get_matches_from(vec![
        "clou",
        "--config-file",
        config_file.to_str().unwrap(),
    ]);

    let err = Config::load(command(), vec![&matches]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "config.toml has an invalid value for key 'theme': neon\nPossible values are: auto, light, dark"
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_load_rejects_non_numeric_context_window() -> Result<()> {
    let dir = TempDir::new()?;
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "context-window = \"lots\"\n")?;

    let matches = command().get_matches_from(vec![
        "clou",
        "--config-file",
        config_file.to_str().unwrap(),
    ]);

    let err = Config::load(command(), vec![&matches]).await.unwrap_err();
    assert!(err.to_string().contains("context-window"));

    Ok(())
}

#[test]
fn test_serialize_default() {
    let toml_str = Config::serialize_default(command());

    assert_eq!(
        toml_str,
        [
            "# Base URL of the Clouseau API server.\napi-url = \"http://localhost:8000\"",
            "# Context window size used for the usage indicator.\ncontext-window = 200000",
            "# Color theme of the viewer. [possible values: auto, light, dark]\ntheme = \"auto\"",
        ]
        .join("\n\n")
    );
}

#[tokio::test]
#[serial]
async fn test_write_default_creates_parent_dirs() -> Result<()> {
    let dir = TempDir::new()?;
    let config_file = dir.path().join("nested/clouseau/config.toml");
    Config::set(ConfigKey::ConfigFile, config_file.to_str().unwrap());

    let written = Config::write_default(command()).await?;

    assert_eq!(written, config_file);
    let contents = std::fs::read_to_string(&config_file)?;
    assert!(contents.contains("api-url = \"http://localhost:8000\""));
    assert!(contents.parse::<toml_edit::Document>().is_ok());

    Ok(())
}

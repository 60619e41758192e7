use std::io::Write;
use std::path;

use anyhow::Result;
use clap::Command;
use clouseau_term::Config;
use clouseau_term::ConfigKey;
use dialoguer::Editor;
use tokio::fs;

use crate::cli::ConfigAction;

pub async fn run(cmd: Command, action: ConfigAction, out: &mut impl Write) -> Result<()> {
    let config_file = Config::get(ConfigKey::ConfigFile);

    match action {
        ConfigAction::Show => {
            writeln!(out, "# {config_file}")?;
            writeln!(out, "{}", Config::serialize_current(cmd))?;
        }
        ConfigAction::Edit => {
            if !path::Path::new(&config_file).exists() {
                Config::write_default(cmd).await?;
            }

            let contents = fs::read_to_string(&config_file).await?;
            match Editor::new().extension(".toml").edit(&contents)? {
                Some(edited) if edited != contents => {
                    fs::write(&config_file, edited).await?;
                    writeln!(out, "Saved {config_file}")?;
                }
                _ => writeln!(out, "Config unchanged")?,
            }
        }
        ConfigAction::Reset => {
            let written = Config::write_default(cmd).await?;
            writeln!(out, "Config reset to defaults: {}", written.display())?;
        }
    }

    Ok(())
}

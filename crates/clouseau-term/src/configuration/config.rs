#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiUrl,
    ConfigFile,
    ContextWindow,
    SessionID,
    Theme,
}

pub struct Config {}

fn find_arg(cmd: &Command, key: ConfigKey) -> Option<&Arg> {
    let key = key.to_string();
    return cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some(key.as_str()));
}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Reads a numeric key, failing with the key name when it isn't a number.
    pub fn get_u64(key: ConfigKey) -> Result<u64> {
        let val = Config::get(key);
        match val.parse::<u64>() {
            Ok(num) => return Ok(num),
            Err(_) => bail!(format!("Config key '{key}' must be a number, got '{val}'")),
        }
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| path::PathBuf::from("."))
            .join("clouseau/config.toml");

        let res = match key {
            ConfigKey::ApiUrl => "http://localhost:8000".to_string(),
            ConfigKey::ContextWindow => "200000".to_string(),
            ConfigKey::Theme => "auto".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::SessionID => "".to_string(),
        };

        return res;
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = find_arg(&cmd, key) {
                        if !arg.get_possible_values().is_empty() {
                            possible_values = arg
                                .get_possible_values()
                                .iter()
                                .map(|e| return e.get_name().to_string())
                                .collect::<Vec<String>>();
                        }
                    }

                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if !possible_values.is_empty()
                            && !possible_values.contains(&val_str.to_string())
                        {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        Config::get_u64(ConfigKey::ContextWindow)?;

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiUrl),
            context_window = Config::get(ConfigKey::ContextWindow),
            theme = Config::get(ConfigKey::Theme),
            config_file = Config::get(ConfigKey::ConfigFile),
            "config"
        );

        return Ok(());
    }

    /// Renders a commented config file holding every default value.
    pub fn serialize_default(cmd: Command) -> String {
        return Config::serialize_with(cmd, Config::default);
    }

    /// Renders the effective configuration in the config file format.
    pub fn serialize_current(cmd: Command) -> String {
        return Config::serialize_with(cmd, Config::get);
    }

    fn serialize_with(cmd: Command, value_of: impl Fn(ConfigKey) -> String) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::SessionID || key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = find_arg(&cmd, key)?;
                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = value_of(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }

    /// Writes the default config to the configured config file path,
    /// replacing whatever is there. Returns the path written.
    pub async fn write_default(cmd: Command) -> Result<path::PathBuf> {
        let mut config_file = Config::get(ConfigKey::ConfigFile);
        if config_file.is_empty() {
            config_file = Config::default(ConfigKey::ConfigFile);
        }

        let config_path = path::PathBuf::from(config_file);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let toml_str = format!("{}\n", Config::serialize_default(cmd));
        fs::write(&config_path, toml_str).await?;
        tracing::info!(path = ?config_path, "wrote default config");

        return Ok(config_path);
    }
}

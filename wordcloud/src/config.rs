// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "wordcloud.toml";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub stopwords: StopwordsConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct StopwordsConfig {
    /// Words added to the stopword set.
    #[serde(default)]
    pub extra: Vec<String>,

    /// When true, `extra` replaces the built-in list instead of extending it.
    #[serde(default)]
    pub replace: bool,
}

/// Loads the configuration from a `wordcloud.toml` file starting from the
/// given directory and recursively checking parent directories until a file
/// is found. A missing file is not an error; defaults apply.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file exists but cannot be read
/// * The file is not valid TOML for the expected schema
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();

    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.exists() {
            return read_config_file(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}

/// Reads and parses a configuration file at an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

//! Configuration module for `RoadmapTracker`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Compiled-in defaults, selected by build profile so a debug build can keep
/// its own noisier configuration.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Backend synchronization configuration (placeholder service)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Backend auth token
    #[serde(default)]
    pub token: String,
    /// Backend endpoint
    #[serde(default)]
    pub endpoint: String,
}

/// Shareable URL configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Origin used when generating shareable URLs
    #[serde(default)]
    pub base_url: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Catalog feed file; empty means the compiled-in demo catalog
    #[serde(default)]
    pub catalog_file: String,
    /// Directory holding the persisted progress state
    #[serde(default)]
    pub data_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Backend sync settings
    #[serde(default)]
    pub sync: SyncConfig,
    /// Shareable URL settings
    #[serde(default)]
    pub share: ShareConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override backend sync token
    pub sync_token: Option<String>,
    /// Override backend sync endpoint
    pub sync_endpoint: Option<String>,
    /// Override shareable URL origin
    pub base_url: Option<String>,
    /// Override catalog feed file
    pub catalog_file: Option<String>,
    /// Override data directory
    pub data_dir: Option<String>,
}

/// Canonical form of a user-facing config key, with kebab-case aliases
/// folded in
fn canonical_key(key: &str) -> &str {
    match key {
        "base-url" => "base_url",
        "catalog-file" => "catalog_file",
        "data-dir" => "data_dir",
        other => other,
    }
}

impl Config {
    /// The `$ROADMAPS` directory
    ///
    /// Resolves to the platform config directory plus `roadmaps`:
    /// `~/.config/roadmaps` on Linux, `~/Library/Application Support/roadmaps`
    /// on macOS, `%APPDATA%\roadmaps` on Windows.
    #[must_use]
    pub fn get_roadmaps_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roadmaps")
    }

    /// Fill empty string fields from `defaults`
    ///
    /// Run after loading an older config file so fields added in later
    /// versions pick up their defaults without clobbering anything the user
    /// customized. Returns true when at least one field changed.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        fn fill(field: &mut String, default: &str) -> bool {
            if field.is_empty() && !default.is_empty() {
                *field = default.to_string();
                return true;
            }
            false
        }

        let mut changed = false;
        changed |= fill(&mut self.logging.level, &defaults.logging.level);
        changed |= fill(&mut self.logging.file, &defaults.logging.file);
        changed |= fill(&mut self.sync.token, &defaults.sync.token);
        changed |= fill(&mut self.sync.endpoint, &defaults.sync.endpoint);
        changed |= fill(&mut self.share.base_url, &defaults.share.base_url);
        changed |= fill(&mut self.paths.catalog_file, &defaults.paths.catalog_file);
        changed |= fill(&mut self.paths.data_dir, &defaults.paths.data_dir);
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the persistent file is untouched.
    /// `None` fields leave the corresponding value alone.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(token) = &overrides.sync_token {
            self.sync.token.clone_from(token);
        }
        if let Some(endpoint) = &overrides.sync_endpoint {
            self.sync.endpoint.clone_from(endpoint);
        }
        if let Some(base_url) = &overrides.base_url {
            self.share.base_url.clone_from(base_url);
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file.clone_from(catalog_file);
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
    }

    /// Full path of the user config file inside [`get_roadmaps_dir`]
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds so
    /// the two never fight over one file.
    ///
    /// [`get_roadmaps_dir`]: Self::get_roadmaps_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_roadmaps_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$ROADMAPS` in a value with the actual roadmaps directory
    fn expand_variables(value: &str) -> String {
        if value.contains("$ROADMAPS") {
            let roadmaps_dir = Self::get_roadmaps_dir();
            value.replace("$ROADMAPS", roadmaps_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML configuration string, expanding `$ROADMAPS` in
    /// path-bearing values
    ///
    /// Missing fields take their serde defaults (empty string or false).
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or does not match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.sync.token = Self::expand_variables(&config.sync.token);
        config.sync.endpoint = Self::expand_variables(&config.sync.endpoint);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);

        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML, which
    /// cannot happen for a correctly built binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user configuration, creating it on first run
    ///
    /// An existing file is parsed and topped up with any newly added fields
    /// (which are saved back). A missing file is created from the compiled-in
    /// defaults. Any error falls back to the defaults for this run.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
            return defaults;
        }

        // First run: write the defaults so the user has a file to edit
        let _ = defaults.save();
        defaults
    }

    /// Serialize to TOML and write the user config file, creating the
    /// directory if needed
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation, or the write
    /// fails
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Read one value by user-facing key, as a string
    ///
    /// Keys: `level`, `file`, `verbose`, `token`, `endpoint`, `base_url`,
    /// `catalog_file`, `data_dir` (kebab-case accepted for the multi-word
    /// ones). Unknown keys yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match canonical_key(key) {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "token" => Some(self.sync.token.clone()),
            "endpoint" => Some(self.sync.endpoint.clone()),
            "base_url" => Some(self.share.base_url.clone()),
            "catalog_file" => Some(self.paths.catalog_file.clone()),
            "data_dir" => Some(self.paths.data_dir.clone()),
            _ => None,
        }
    }

    /// Set one value by user-facing key (in memory; call
    /// [`save()`](Config::save) to persist)
    ///
    /// # Errors
    /// Returns an error for an unknown key or a value that does not parse
    /// (the `verbose` boolean)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match canonical_key(key) {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "token" => self.sync.token = value.to_string(),
            "endpoint" => self.sync.endpoint = value.to_string(),
            "base_url" => self.share.base_url = value.to_string(),
            "catalog_file" => self.paths.catalog_file = value.to_string(),
            "data_dir" => self.paths.data_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Restore one value to its default (in memory)
    ///
    /// # Errors
    /// Returns an error for an unknown key
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let canonical = canonical_key(key);
        if canonical == "verbose" {
            self.logging.verbose = defaults.logging.verbose;
            return Ok(());
        }
        let default_value = defaults
            .get(canonical)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(canonical, &default_value)
    }

    /// Delete the user config file so the next [`load()`](Config::load)
    /// recreates it from defaults
    ///
    /// A missing file counts as success. The CLI asks for confirmation
    /// before calling this.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[sync]")?;
        writeln!(f, "  token = \"{}\"", self.sync.token)?;
        writeln!(f, "  endpoint = \"{}\"", self.sync.endpoint)?;

        writeln!(f, "\n[share]")?;
        writeln!(f, "  base_url = \"{}\"", self.share.base_url)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_folds_aliases() {
        assert_eq!(canonical_key("base-url"), "base_url");
        assert_eq!(canonical_key("data-dir"), "data_dir");
        assert_eq!(canonical_key("level"), "level");
    }

    #[test]
    fn test_defaults_parse_and_have_share_origin() {
        let config = Config::from_defaults();
        assert!(!config.share.base_url.is_empty());
        assert!(config.paths.data_dir.contains("roadmaps"));
    }

    #[test]
    fn test_unset_restores_default_value() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        config.set("base_url", "https://elsewhere.test").unwrap();
        config.unset("base-url", &defaults).unwrap();
        assert_eq!(config.share.base_url, defaults.share.base_url);
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shopster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolving happen before the file logger exists (the log file
//! and level are config values themselves), so both record their messages in
//! a `StartupLog` that `main` replays once the logger is installed.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::filter::CategoryFilter;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShopsterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub dark_mode: Option<bool>,
    pub default_category: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "shopster.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the built-in demo catalog.
    pub catalog_file: Option<PathBuf>,
    pub dark_mode: bool,
    pub initial_category: CategoryFilter,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values taken from command-line flags. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub catalog_file: Option<PathBuf>,
    pub category: Option<CategoryFilter>,
    pub dark_mode: Option<bool>,
}

// ============================================================================
// Startup Log
// ============================================================================

/// Log records held back until the file logger is installed.
#[derive(Debug, Default)]
pub struct StartupLog {
    records: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn info(&mut self, message: impl Into<String>) {
        self.records.push((Level::Info, message.into()));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.records.push((Level::Warn, message.into()));
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.records.push((Level::Debug, message.into()));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Emit every held record through the installed logger, oldest first.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.shopster/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shopster"))
}

/// Returns the path to `~/.shopster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.shopster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShopsterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(startup: &mut StartupLog) -> Result<ShopsterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            startup.warn("Could not determine home directory, using default config");
            return Ok(ShopsterConfig::default());
        }
    };

    if !path.exists() {
        startup.info(format!(
            "No config file found, generating default at {}",
            path.display()
        ));
        generate_default_config(&path, startup);
        return Ok(ShopsterConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShopsterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    startup.info(format!("Loaded config from {}", path.display()));
    startup.debug(format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    let default_content = r#"# Shopster Configuration
# All settings are optional, defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "groceries.toml"   # TOML or .json; relative to ~/.shopster/ (or SHOPSTER_CATALOG)
# log_file = "shopster.log"
# log_level = "debug"               # "off", "error", "warn", "info", "debug", "trace"

# [display]
# dark_mode = false
# default_category = "All"          # "All", "Produce", "Dairy", "Dessert"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            startup.warn(format!("Failed to create config directory: {}", e));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        startup.warn(format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &ShopsterConfig,
    cli: &CliOverrides,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok(), startup)
}

/// `resolve` with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &ShopsterConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    // Catalog: CLI → env → config (relative to ~/.shopster/) → demo
    let catalog_file = cli
        .catalog_file
        .clone()
        .or_else(|| env("SHOPSTER_CATALOG").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .catalog_file
                .as_deref()
                .map(resolve_config_relative)
        });

    // Log level: env → config → default
    let log_level = env("SHOPSTER_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .map(|raw| parse_log_level(&raw, startup))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let initial_category = cli
        .category
        .clone()
        .unwrap_or_else(|| resolve_default_category(config, startup));

    ResolvedConfig {
        catalog_file,
        dark_mode: cli
            .dark_mode
            .or(config.display.dark_mode)
            .unwrap_or(false),
        initial_category,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        log_level,
    }
}

/// Relative catalog paths in the config file are anchored at `~/.shopster/`.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn resolve_default_category(config: &ShopsterConfig, startup: &mut StartupLog) -> CategoryFilter {
    match config.display.default_category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => CategoryFilter::parse(raw).unwrap_or_else(|| {
            startup.warn(format!("Unknown default_category {:?}, falling back to All", raw));
            CategoryFilter::All
        }),
    }
}

fn parse_log_level(raw: &str, startup: &mut StartupLog) -> LevelFilter {
    LevelFilter::from_str(raw).unwrap_or_else(|_| {
        startup.warn(format!("Unknown log_level {:?}, using {}", raw, DEFAULT_LOG_LEVEL));
        DEFAULT_LOG_LEVEL
    })
}

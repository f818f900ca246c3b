//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::tab::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<Tab>,
    pub show_onboarding: Option<bool>,
    pub deep_links: Option<Vec<String>>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "storefront.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub show_onboarding: bool,
    /// Config file links first, then CLI links; applied in order at startup.
    pub deep_links: Vec<String>,
    pub log_level: LevelFilter,
    pub log_file: String,
}

/// Values supplied on the command line. `None`/empty = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start_tab: Option<Tab>,
    pub no_onboarding: bool,
    pub deep_links: Vec<String>,
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
// Startup Log
// ============================================================================

/// Messages produced while loading config, before the file logger exists.
///
/// The logger's level and destination come from the resolved config, so
/// loading and resolution record here and `main` replays once it is up.
#[derive(Debug, Default)]
pub struct StartupLog {
    entries: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push((level, message.into()));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Emit every recorded message through the installed logger, in order.
    pub fn replay(self) {
        for (level, message) in self.entries {
            log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `~/.storefront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StorefrontConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(startup: &mut StartupLog) -> Result<StorefrontConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            startup.record(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            return Ok(StorefrontConfig::default());
        }
    };

    if !path.exists() {
        startup.record(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, startup);
        return Ok(StorefrontConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    startup.record(Level::Info, format!("Loaded config from {}", path.display()));
    startup.record(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StorefrontConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG: &str = r#"# Storefront Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                 # "home", "catalog", "cart", "profile"
# show_onboarding = false            # present the onboarding cover at launch
# deep_links = ["product/999"]       # applied in order at launch
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "storefront.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        startup.record(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        startup.record(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

pub const ENV_TAB: &str = "STOREFRONT_TAB";
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &StorefrontConfig,
    cli: &CliOverrides,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok(), startup)
}

/// `resolve` with the environment supplied by `env`.
pub fn resolve_with(
    config: &StorefrontConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → default
    let start_tab = cli
        .start_tab
        .or_else(|| {
            let name = env(ENV_TAB)?;
            let tab = Tab::from_name(name.trim());
            if tab.is_none() {
                startup.record(Level::Warn, format!("Ignoring unknown {ENV_TAB}: {name}"));
            }
            tab
        })
        .or(config.general.start_tab)
        .unwrap_or_default();

    let show_onboarding = !cli.no_onboarding && config.general.show_onboarding.unwrap_or(false);

    let mut deep_links = config.general.deep_links.clone().unwrap_or_default();
    deep_links.extend(cli.deep_links.iter().cloned());

    // Log level: env → config → default, skipping values that don't parse
    let log_level = [env(ENV_LOG_LEVEL), config.general.log_level.clone()]
        .into_iter()
        .flatten()
        .find_map(|level| match level.trim().parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                startup.record(Level::Warn, format!("Ignoring unknown log level: {level}"));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        start_tab,
        show_onboarding,
        deep_links,
        log_level,
        log_file,
    }
}

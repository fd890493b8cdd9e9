//! Configuration for parlor.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (PARLOR_ENDPOINT, PARLOR_STORAGE)
//! 2. Config file (.parlor/config.yaml)
//! 3. Defaults (~/.parlor)
//!
//! Config file discovery:
//! - Searches current directory and parents for .parlor/config.yaml
//! - The storage path in the config file is relative to the config file's
//!   project root

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::form::FormSettings;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_CONFIRM_TARGET: &str = "thankyou.html";
const DEFAULT_REDIRECT_DELAY_SECONDS: u64 = 2;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub form: Option<FormSection>,
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormSection {
    /// Form backend endpoint the contact form posts to
    pub endpoint: Option<String>,
    /// Relative destination after a successful submission
    pub confirm_target: Option<String>,
    /// Seconds to wait before navigating there
    pub redirect_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsSection {
    /// Storage file for form drafts (relative to the project root)
    pub storage: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Form backend endpoint, if configured anywhere
    pub endpoint: Option<String>,
    /// Confirmation destination after a successful submission
    pub confirm_target: String,
    /// Delay before navigating to the confirmation destination
    pub redirect_delay: Duration,
    /// Absolute path of the draft storage file
    pub storage: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// The controller settings derived from this configuration
    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            confirm_target: self.confirm_target.clone(),
            redirect_delay: self.redirect_delay,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".parlor").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_storage = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".parlor")
        .join("storage.json");

    let config_file = find_config_file();

    let (mut endpoint, mut confirm_target, mut redirect_delay, mut storage) = (
        None,
        DEFAULT_CONFIRM_TARGET.to_string(),
        Duration::from_secs(DEFAULT_REDIRECT_DELAY_SECONDS),
        default_storage,
    );

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .parlor/ (i.e. the project root)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(form) = config.form {
            endpoint = form.endpoint;
            if let Some(target) = form.confirm_target {
                confirm_target = target;
            }
            if let Some(seconds) = form.redirect_delay_seconds {
                redirect_delay = Duration::from_secs(seconds);
            }
        }

        if let Some(ref storage_path) = config.paths.storage {
            storage = resolve_path(base_dir, storage_path);
        }
    }

    // Environment variables win over the file
    if let Ok(env_endpoint) = std::env::var("PARLOR_ENDPOINT") {
        endpoint = Some(env_endpoint);
    }
    if let Ok(env_storage) = std::env::var("PARLOR_STORAGE") {
        storage = PathBuf::from(env_storage);
    }

    Ok(ResolvedConfig {
        endpoint,
        confirm_target,
        redirect_delay,
        storage,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

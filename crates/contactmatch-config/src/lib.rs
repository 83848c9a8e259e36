use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use contactmatch_core::domain::mimetype::{resolve_mimetype, PHONE};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "contactmatch";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_HIGHLIGHT_OPEN: &str = "[";
pub const DEFAULT_HIGHLIGHT_CLOSE: &str = "]";
const MAX_MARKER_CHARS: usize = 16;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_mimetype: String,
    pub highlight: HighlightConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    pub open: String,
    pub close: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mimetype: PHONE.to_string(),
            highlight: HighlightConfig {
                open: DEFAULT_HIGHLIGHT_OPEN.to_string(),
                close: DEFAULT_HIGHLIGHT_CLOSE.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid default_mimetype value: {0:?}")]
    InvalidDefaultMimetype(String),
    #[error("invalid highlight.{field} marker: {value:?}")]
    InvalidHighlightMarker { field: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_mimetype: Option<String>,
    highlight: Option<HighlightFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HighlightFile {
    open: Option<String>,
    close: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(mimetype) = parsed.default_mimetype {
        let resolved = resolve_mimetype(&mimetype);
        if resolved.is_empty() || resolved.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDefaultMimetype(mimetype));
        }
        config.default_mimetype = resolved.to_string();
    }

    if let Some(highlight) = parsed.highlight {
        if let Some(open) = highlight.open {
            config.highlight.open = validate_marker("open", open)?;
        }
        if let Some(close) = highlight.close {
            config.highlight.close = validate_marker("close", close)?;
        }
    }

    Ok(config)
}

fn validate_marker(field: &'static str, value: String) -> Result<String> {
    if value.chars().count() > MAX_MARKER_CHARS || value.contains('\n') {
        return Err(ConfigError::InvalidHighlightMarker { field, value });
    }
    Ok(value)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

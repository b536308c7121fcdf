use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;
use tracing::debug;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig, ValidationConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve a config file.
    ///
    /// Uses `config_path` when given, otherwise [`default_config_path`].
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        let mut resolved = Self::resolve_profile(&active, prof, &cf.validation, &cf.logging)?;
        resolved.source = Some(path);
        debug!(profile = %resolved.active_profile, root = %resolved.docs_root.display(), "loaded config");
        Ok(resolved)
    }

    /// Like [`ConfigLoader::load`], but falls back to built-in defaults rooted at
    /// `fallback_root` when no explicit path is given and the default file is absent.
    pub fn load_or_default(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
        fallback_root: &Path,
    ) -> Result<ResolvedConfig, ConfigError> {
        if config_path.is_none() && !default_config_path().exists() {
            debug!("no config file found, using defaults");
            return Ok(ResolvedConfig::defaults(fallback_root.to_path_buf()));
        }
        Self::load(config_path, profile_override)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        validation: &ValidationConfig,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let docs_root = expand_path(&prof.docs_root)?;
        let sub = |s: &str| s.replace("{{docs_root}}", &docs_root.to_string_lossy());

        let excluded_folders = prof
            .excluded_folders
            .iter()
            .map(|f| expand_path(&sub(f)))
            .collect::<Result<Vec<_>, _>>()?;

        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            source: None,
            docs_root,
            excluded_folders,
            validation: validation.clone(),
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("docmeta").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("docmeta").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

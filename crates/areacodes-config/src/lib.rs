use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

const APP_DIR: &str = "areacodes";
const CONFIG_FILENAME: &str = "config.toml";

pub const ENV_VAR: &str = "AREACODES_ENV";
pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_AREA_CODES_PATH: &str = "resources/area_codes.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub area_codes_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_file_name: String,
}

impl AppConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            area_codes_path: PathBuf::from(DEFAULT_AREA_CODES_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
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
    #[error("invalid environment name: {0:?}")]
    InvalidEnvironment(String),
    #[error("invalid output_file_name value: {0:?}")]
    InvalidOutputFileName(String),
    #[error("invalid {field} value: path cannot be empty")]
    EmptyPath { field: &'static str },
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

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    area_codes_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_file_name: Option<String>,
    #[serde(default)]
    environments: BTreeMap<String, PathsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsFile {
    area_codes_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_file_name: Option<String>,
}

/// Loads the configuration for `environment` (see [`resolve_environment`]).
///
/// A custom `config_path` must exist. The default location is optional and
/// built-in defaults apply when it is missing.
pub fn load(config_path: Option<PathBuf>, environment: &str) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => {
            return merge_config(ConfigFile::default(), environment)
        }
        Err(ConfigError::InvalidConfigPath(_)) if !required => {
            return merge_config(ConfigFile::default(), environment)
        }
        Err(err) => return Err(err),
    };
    let parsed = load_at_path(&path, required)?.unwrap_or_default();
    merge_config(parsed, environment)
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

/// Picks the active environment: the explicit name, else `AREACODES_ENV`,
/// else `dev`.
pub fn resolve_environment(explicit: Option<String>) -> Result<String> {
    let name = match explicit {
        Some(name) => name,
        None => match env::var(ENV_VAR) {
            Ok(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_ENVIRONMENT.to_string(),
        },
    };
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvironment(name));
    }
    Ok(trimmed.to_string())
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(Some(parsed))
}

fn merge_config(parsed: ConfigFile, environment: &str) -> Result<AppConfig> {
    let ConfigFile {
        area_codes_path,
        output_dir,
        output_file_name,
        mut environments,
    } = parsed;
    let base = PathsFile {
        area_codes_path,
        output_dir,
        output_file_name,
    };

    let mut config = AppConfig {
        environment: environment.to_string(),
        ..AppConfig::default()
    };
    apply_paths(&mut config, base)?;

    match environments.remove(environment) {
        Some(overrides) => apply_paths(&mut config, overrides)?,
        None => {
            if environment != DEFAULT_ENVIRONMENT {
                warn!(
                    environment,
                    fallback = DEFAULT_ENVIRONMENT,
                    "unknown environment, using fallback"
                );
                config.environment = DEFAULT_ENVIRONMENT.to_string();
            }
            if let Some(overrides) = environments.remove(DEFAULT_ENVIRONMENT) {
                apply_paths(&mut config, overrides)?;
            }
        }
    }

    Ok(config)
}

fn apply_paths(config: &mut AppConfig, paths: PathsFile) -> Result<()> {
    if let Some(path) = paths.area_codes_path {
        config.area_codes_path = non_empty_path(path, "area_codes_path")?;
    }
    if let Some(dir) = paths.output_dir {
        config.output_dir = non_empty_path(dir, "output_dir")?;
    }
    if let Some(name) = paths.output_file_name {
        config.output_file_name = validate_output_file_name(&name)?;
    }
    Ok(())
}

fn non_empty_path(path: PathBuf, field: &'static str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { field });
    }
    Ok(path)
}

pub fn validate_output_file_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
    {
        return Err(ConfigError::InvalidOutputFileName(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, resolve_environment, validate_output_file_name, ConfigError,
        ConfigFile, PathsFile,
    };
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_base_then_environment() {
        let mut environments = BTreeMap::new();
        environments.insert(
            "prod".to_string(),
            PathsFile {
                area_codes_path: None,
                output_dir: Some(PathBuf::from("/var/lib/areacodes")),
                output_file_name: None,
            },
        );
        let parsed = ConfigFile {
            area_codes_path: Some(PathBuf::from("data/codes.txt")),
            output_dir: Some(PathBuf::from("out")),
            output_file_name: Some("report.txt".to_string()),
            environments,
        };
        let merged = merge_config(parsed, "prod").expect("merge");
        assert_eq!(merged.environment, "prod");
        assert_eq!(merged.area_codes_path, PathBuf::from("data/codes.txt"));
        assert_eq!(merged.output_dir, PathBuf::from("/var/lib/areacodes"));
        assert_eq!(
            merged.output_path(),
            PathBuf::from("/var/lib/areacodes/report.txt")
        );
    }

    #[test]
    fn merge_config_unknown_environment_falls_back_to_dev() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "output_file_name = \"base.txt\"\n\n[environments.dev]\noutput_dir = \"dev-out\"\n\n[environments.test]\noutput_dir = \"target/test-output\"\n",
        )
        .expect("write config");

        let parsed = load_at_path(&path, true).expect("load").expect("config");
        let merged = merge_config(parsed, "staging").expect("merge");
        assert_eq!(merged.environment, "dev");
        assert_eq!(merged.output_dir, PathBuf::from("dev-out"));
        assert_eq!(merged.output_file_name, "base.txt");
    }

    #[test]
    fn merge_config_unknown_environment_without_dev_uses_base() {
        let mut environments = BTreeMap::new();
        environments.insert(
            "test".to_string(),
            PathsFile {
                output_dir: Some(PathBuf::from("target/test-output")),
                ..PathsFile::default()
            },
        );
        let parsed = ConfigFile {
            environments,
            ..ConfigFile::default()
        };
        let merged = merge_config(parsed, "staging").expect("merge");
        assert_eq!(merged.environment, "dev");
        assert_eq!(merged.output_dir, PathBuf::from("output"));
        assert_eq!(merged.output_file_name, "output.txt");
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "area_codes_path = \"codes.txt\"\n\n[environments.test]\noutput_file_name = \"test.txt\"\n",
        )
        .expect("write config");

        let parsed = load_at_path(&path, true).expect("load").expect("config");
        let config = merge_config(parsed, "test").expect("merge");
        assert_eq!(config.area_codes_path, PathBuf::from("codes.txt"));
        assert_eq!(config.output_file_name, "test.txt");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "output = \"x\"\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn output_file_name_must_be_a_bare_name() {
        assert_eq!(validate_output_file_name(" out.txt ").unwrap(), "out.txt");
        assert!(validate_output_file_name("").is_err());
        assert!(validate_output_file_name("dir/out.txt").is_err());
        assert!(validate_output_file_name("..").is_err());
    }

    #[test]
    fn explicit_environment_wins() {
        assert_eq!(resolve_environment(Some("prod".to_string())).unwrap(), "prod");
        assert!(resolve_environment(Some("  ".to_string())).is_err());
        assert!(resolve_environment(Some("my env".to_string())).is_err());
    }
}

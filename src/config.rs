//! Layered configuration.
//!
//! Values are read from the process environment (with `.env` already loaded by
//! `main`), then overridden by `instance/config.env` if it exists, then by the
//! file named in `QUOTES_SETTINGS`. The selected [`Environment`] decides the
//! defaults and which keys are mandatory.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::level_filters::LevelFilter;

use crate::{
    constants::{
        DEFAULT_DATABASE_URL, INSECURE_SECRET_KEY, INSTANCE_SETTINGS_PATH, TEST_DATABASE_URL,
    },
    error::ConfigError,
};

pub const ENVIRONMENT_VAR: &str = "APP_ENV";
pub const SETTINGS_FILE_VAR: &str = "QUOTES_SETTINGS";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "testing" => Ok(Self::Testing),
            "production" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        };

        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub secret_key: String,
    pub log_level: LevelFilter,
    pub seed_data_file: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    /// Settings files merged on top of the environment, in load order.
    pub settings_files: Vec<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("database_url", &self.database_url)
            .field("secret_key", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("seed_data_file", &self.seed_data_file)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("settings_files", &self.settings_files)
            .finish()
    }
}

impl Config {
    /// Reads every configuration layer. `environment` overrides `APP_ENV`.
    pub fn load(environment: Option<&str>) -> Result<Self, ConfigError> {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        Self::from_layers(environment, vars, Path::new(INSTANCE_SETTINGS_PATH))
    }

    pub fn from_layers(
        environment: Option<&str>,
        mut vars: HashMap<String, String>,
        instance_settings: &Path,
    ) -> Result<Self, ConfigError> {
        let mut settings_files = vec![];

        if merge_settings_file(&mut vars, instance_settings, false)? {
            settings_files.push(instance_settings.to_path_buf());
        }

        if let Some(path) = lookup(&vars, SETTINGS_FILE_VAR).map(PathBuf::from) {
            merge_settings_file(&mut vars, &path, true)?;
            settings_files.push(path);
        }

        Ok(Self {
            settings_files,
            ..Self::from_vars(environment, &vars)?
        })
    }

    /// Builds the config from an already merged set of variables.
    pub fn from_vars(
        environment: Option<&str>,
        vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let environment = match environment.or_else(|| lookup(vars, ENVIRONMENT_VAR)) {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };

        let database_url = match environment {
            Environment::Development => lookup(vars, "DEV_DATABASE_URL")
                .or_else(|| lookup(vars, "DATABASE_URL"))
                .unwrap_or(DEFAULT_DATABASE_URL),
            Environment::Testing => {
                lookup(vars, "TEST_DATABASE_URL").unwrap_or(TEST_DATABASE_URL)
            }
            Environment::Production => {
                lookup(vars, "DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?
            }
        };

        let secret_key = match environment {
            Environment::Production => {
                lookup(vars, "SECRET_KEY").ok_or(ConfigError::MissingVar("SECRET_KEY"))?
            }
            _ => lookup(vars, "SECRET_KEY").unwrap_or(INSECURE_SECRET_KEY),
        };

        let log_level = parse_or(vars, "LOG_LEVEL", LevelFilter::INFO, |value| {
            value.to_ascii_lowercase().parse().ok()
        })?;

        let port = parse_or(vars, "PORT", 5000, |value| value.parse().ok())?;

        Ok(Self {
            environment,
            database_url: database_url.to_string(),
            secret_key: secret_key.to_string(),
            log_level,
            seed_data_file: lookup(vars, "SEED_DATA_FILE").map(PathBuf::from),
            host: lookup(vars, "HOST").unwrap_or("127.0.0.1").to_string(),
            port,
            settings_files: vec![],
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Empty values count as unset.
fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(
    vars: &HashMap<String, String>,
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match lookup(vars, key) {
        Some(value) => parse(value).ok_or_else(|| ConfigError::InvalidVar {
            key,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

/// Returns whether the file existed and was merged.
fn merge_settings_file(
    vars: &mut HashMap<String, String>,
    path: &Path,
    required: bool,
) -> Result<bool, ConfigError> {
    let settings_error = |source| ConfigError::SettingsFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() && !required => return Ok(false),
        Err(e) => return Err(settings_error(e)),
    };

    for item in iter {
        let (key, value) = item.map_err(settings_error)?;
        vars.insert(key, value);
    }

    Ok(true)
}

//! Environment-sourced scraper configuration.

use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const DATE_FMT: &str = "%Y-%m-%d";
const DEFAULT_OUTPUT_DIR: &str = "/data";
const DEFAULT_RANGE_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every missing required key, reported in one shot.
    #[error("missing required environment variables: {}", keys.join(", "))]
    MissingKeys { keys: Vec<String> },
    #[error("invalid date in {key}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { key: String, value: String },
    #[error("failed to create output directory {}: {source}", dir.display())]
    OutputDir {
        dir: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for one scrape run.
///
/// `day_from`/`day_to` default to the last seven days; `output_dir` defaults
/// to `/data` and may be overridden by the CLI before the run starts.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub email: String,
    pub password: String,
    pub base_url: String,
    pub group_id: String,
    pub day_from: NaiveDate,
    pub day_to: NaiveDate,
    pub output_dir: PathBuf,
}

impl ScraperConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_map(&std::env::vars().collect())
    }

    /// Builds the configuration from an explicit key/value map (used by tests).
    pub fn from_map(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let email = required(env, "EMAIL", &mut missing);
        let password = required(env, "PASSWORD", &mut missing);
        let base_url = required(env, "BASE_URL", &mut missing);
        let group_id = required(env, "GROUP_ID", &mut missing);
        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys { keys: missing });
        }

        let today = Local::now().date_naive();
        let day_to = date_or(env, "DAY_TO", today)?;
        let day_from = date_or(env, "DAY_FROM", today - Duration::days(DEFAULT_RANGE_DAYS))?;

        let output_dir = env
            .get("OUTPUT_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            email,
            password,
            base_url,
            group_id,
            day_from,
            day_to,
            output_dir,
        })
    }

    /// Creates the output directory (recursively) if it does not exist.
    pub fn ensure_output_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ConfigError::OutputDir {
            dir: self.output_dir.clone(),
            source,
        })
    }
}

fn required(env: &HashMap<String, String>, key: &str, missing: &mut Vec<String>) -> String {
    match env.get(key).filter(|v| !v.is_empty()) {
        Some(value) => value.clone(),
        None => {
            missing.push(key.to_string());
            String::new()
        }
    }
}

fn date_or(
    env: &HashMap<String, String>,
    key: &str,
    default: NaiveDate,
) -> Result<NaiveDate, ConfigError> {
    match env.get(key).filter(|v| !v.is_empty()) {
        Some(value) => {
            NaiveDate::parse_from_str(value, DATE_FMT).map_err(|_| ConfigError::InvalidDate {
                key: key.to_string(),
                value: value.clone(),
            })
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> HashMap<String, String> {
        [
            ("EMAIL", "parent@example.com"),
            ("PASSWORD", "hunter2"),
            ("BASE_URL", "https://example.mykita.com"),
            ("GROUP_ID", "11"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn loads_required_keys() {
        let cfg = ScraperConfig::from_map(&full_env()).unwrap();
        assert_eq!(cfg.email, "parent@example.com");
        assert_eq!(cfg.password, "hunter2");
        assert_eq!(cfg.base_url, "https://example.mykita.com");
        assert_eq!(cfg.group_id, "11");
        assert_eq!(cfg.output_dir, PathBuf::from("/data"));
    }

    #[test]
    fn missing_all_required_keys_named_in_one_error() {
        let err = ScraperConfig::from_map(&HashMap::new()).unwrap_err();
        let message = err.to_string();
        for key in ["EMAIL", "PASSWORD", "BASE_URL", "GROUP_ID"] {
            assert!(message.contains(key), "message should name {}: {}", key, message);
        }
    }

    #[test]
    fn missing_single_key_names_only_that_key() {
        let mut env = full_env();
        env.remove("PASSWORD");
        let err = ScraperConfig::from_map(&env).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PASSWORD"));
        assert!(!message.contains("EMAIL"));
        assert!(!message.contains("BASE_URL"));
        assert!(!message.contains("GROUP_ID"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert("EMAIL".to_string(), String::new());
        let err = ScraperConfig::from_map(&env).unwrap_err();
        assert!(err.to_string().contains("EMAIL"));
    }

    #[test]
    fn default_date_range_is_last_seven_days() {
        let cfg = ScraperConfig::from_map(&full_env()).unwrap();
        assert_eq!((cfg.day_to - cfg.day_from).num_days(), 7);
    }

    #[test]
    fn explicit_dates_parsed() {
        let mut env = full_env();
        env.insert("DAY_FROM".to_string(), "2023-01-02".to_string());
        env.insert("DAY_TO".to_string(), "2023-01-06".to_string());
        let cfg = ScraperConfig::from_map(&env).unwrap();
        assert_eq!(cfg.day_from, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(cfg.day_to, NaiveDate::from_ymd_opt(2023, 1, 6).unwrap());
    }

    #[test]
    fn invalid_date_rejected() {
        let mut env = full_env();
        env.insert("DAY_FROM".to_string(), "02.01.2023".to_string());
        let err = ScraperConfig::from_map(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { ref key, .. } if key == "DAY_FROM"));
    }

    #[test]
    fn output_dir_override() {
        let mut env = full_env();
        env.insert("OUTPUT_DIR".to_string(), "/tmp/kita".to_string());
        let cfg = ScraperConfig::from_map(&env).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/kita"));
    }

    #[test]
    fn ensure_output_dir_creates_nested_path() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = ScraperConfig::from_map(&full_env()).unwrap();
        cfg.output_dir = tmp.path().join("a/b/c");
        cfg.ensure_output_dir().unwrap();
        assert!(cfg.output_dir.is_dir());
    }
}

use std::{io::ErrorKind, path::Path};

use anyhow::{bail, Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::ScoringConfig;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Names of the state files, relative to the application directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaths {
    pub task_list: String,
    pub unmet_record: String,
    pub experience: String,
}

impl Default for FilePaths {
    fn default() -> Self {
        Self {
            task_list: "list.txt".into(),
            unmet_record: "record.txt".into(),
            experience: "experience.txt".into(),
        }
    }
}

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub scoring: ScoringConfig,
    /// Offset of the clock shown by `status`. Defaults to UTC+8.
    pub utc_offset_hours: i32,
    pub file_paths: FilePaths,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            utc_offset_hours: 8,
            file_paths: FilePaths::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the application directory. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let config = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<AppConfig>(&content)
                .with_context(|| format!("Malformed config {path:?}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {path:?}, using defaults");
                AppConfig::default()
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read config {path:?}")),
        };
        config.validate()?;
        debug!("Loaded config {config:?}");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.target_task_count == 0 {
            bail!("target_task_count must be at least 1");
        }
        if self.scoring.max_continuous_unmet == 0 {
            bail!("max_continuous_unmet must be at least 1");
        }
        if self.scoring.experience_per_task < 0 || self.scoring.experience_penalty < 0 {
            bail!("experience_per_task and experience_penalty can't be negative");
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            bail!(
                "utc_offset_hours must be between -23 and 23, got {}",
                self.utc_offset_hours
            );
        }
        Ok(())
    }

    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .expect("Offset is validated to be within a day")
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::{AppConfig, CONFIG_FILE_NAME};

    #[test]
    fn missing_config_is_default() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load(dir.path())?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scoring.target_task_count, 5);
        assert_eq!(config.scoring.max_continuous_unmet, 3);
        assert_eq!(config.scoring.experience_per_task, 10);
        assert_eq!(config.scoring.experience_penalty, 30);
        assert_eq!(config.timezone().local_minus_utc(), 8 * 3600);
        Ok(())
    }

    #[test]
    fn partial_config_keeps_other_defaults() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "target_task_count": 3, "utc_offset_hours": -5, "file_paths": { "experience": "xp.txt" } }"#,
        )?;
        let config = AppConfig::load(dir.path())?;
        assert_eq!(config.scoring.target_task_count, 3);
        assert_eq!(config.scoring.experience_penalty, 30);
        assert_eq!(config.utc_offset_hours, -5);
        assert_eq!(config.file_paths.experience, "xp.txt");
        assert_eq!(config.file_paths.task_list, "list.txt");
        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "{ not json")?;
        assert!(AppConfig::load(dir.path()).is_err());

        std::fs::write(&path, r#"{ "target_task_count": 0 }"#)?;
        assert!(AppConfig::load(dir.path()).is_err());

        std::fs::write(&path, r#"{ "utc_offset_hours": 30 }"#)?;
        assert!(AppConfig::load(dir.path()).is_err());
        Ok(())
    }
}

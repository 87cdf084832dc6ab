use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::{Author, DEFAULT_FIRST_ID, Department};

fn default_current_user() -> String {
    "Ana Garcia".to_string()
}

fn default_department() -> Option<Department> {
    Some(Department::Sales)
}

fn default_first_project_id() -> u32 {
    DEFAULT_FIRST_ID
}

fn default_sample_data() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name recorded as creator of new projects and author of comments.
    #[serde(default = "default_current_user")]
    pub current_user: String,
    #[serde(default = "default_department")]
    pub department: Option<Department>,
    /// Id handed to the first project created in this session. Only used
    /// without sample data, which always continues from 3.
    #[serde(default = "default_first_project_id")]
    pub first_project_id: u32,
    /// Start with the two demo projects.
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
    #[serde(default)]
    pub log_file: Option<String>,
    /// tracing filter directive, e.g. "debug" or "feasibility=trace".
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_user: default_current_user(),
            department: default_department(),
            first_project_id: default_first_project_id(),
            sample_data: default_sample_data(),
            log_file: None,
            log_level: None,
        }
    }
}

impl Config {
    pub fn load() -> io::Result<Self> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        Self::init_at(&get_config_path())
    }

    /// Creates an empty config file. Returns false if one already exists.
    pub fn init_at(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, "")?;
        Ok(true)
    }

    #[must_use]
    pub fn author(&self) -> Author {
        Author {
            name: self.current_user.clone(),
            department: self.department,
        }
    }

    #[must_use]
    pub fn get_log_path(&self) -> PathBuf {
        self.log_file
            .as_deref()
            .map(resolve_path)
            .unwrap_or_else(get_default_log_path)
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("feasibility")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

pub fn get_default_log_path() -> PathBuf {
    get_config_dir().join("feasibility.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.first_project_id, 3);
        assert!(config.sample_data);
    }

    #[test]
    fn test_partial_file_overrides() {
        let config: Config = toml::from_str(
            "current_user = \"Kim Lee\"\ndepartment = \"quality\"\nsample_data = false\n",
        )
        .unwrap();
        assert_eq!(config.current_user, "Kim Lee");
        assert_eq!(config.department, Some(Department::Quality));
        assert!(!config.sample_data);
        assert_eq!(config.first_project_id, 3);
    }

    #[test]
    fn test_unknown_department_is_rejected() {
        let result: Result<Config, _> = toml::from_str("department = \"marketing\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_init_creates_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_reports_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "first_project_id = \"three\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_author_from_config() {
        let config = Config::default();
        let author = config.author();
        assert_eq!(author.name, "Ana Garcia");
        assert_eq!(author.department, Some(Department::Sales));
    }
}

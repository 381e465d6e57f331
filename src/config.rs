// SPDX-License-Identifier: PMPL-1.0-or-later

//! Publisher configuration loading.
//!
//! Settings come from a JSON or YAML file (chosen by extension) and are
//! then overridden field by field from the command line.

use crate::i18n::Lang;
use crate::prompt::DEFAULT_MAX_ATTEMPTS;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lang-publish.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Directory holding one subdirectory per language code.
    pub pack_root: PathBuf,
    /// Directory holding one `<code>.json` per language code.
    pub json_root: PathBuf,
    /// Host application resource root; packs land in `<resource_root>/lang`.
    pub resource_root: PathBuf,
    pub resource_files: Vec<String>,
    pub resource_extension: String,
    pub max_prompt_attempts: usize,
    /// Language the wizard speaks to the operator in.
    pub locale: Lang,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            pack_root: PathBuf::from("vendor/caouecs/laravel-lang/src"),
            json_root: PathBuf::from("vendor/caouecs/laravel-lang/json"),
            resource_root: PathBuf::from("resources"),
            resource_files: ["auth", "pagination", "passwords", "validation"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            resource_extension: "php".to_string(),
            max_prompt_attempts: DEFAULT_MAX_ATTEMPTS,
            locale: Lang::En,
        }
    }
}

impl PublishConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading publish config {}", path.display()))?;
        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json publish config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml publish config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported publish config extension for {}",
                    path.display()
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_prompt_attempts == 0 {
            return Err(anyhow!("max_prompt_attempts must be at least 1"));
        }
        if self.resource_extension.trim().is_empty() {
            return Err(anyhow!("resource_extension must not be empty"));
        }
        if let Some(bad) = self
            .resource_files
            .iter()
            .find(|name| name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(anyhow!("invalid resource file name {:?}", bad));
        }
        Ok(())
    }

    /// Target directory for translation files: `<resource_root>/lang`.
    pub fn lang_dir(&self) -> PathBuf {
        self.resource_root.join("lang")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_cover_the_four_resource_files() {
        let config = PublishConfig::default();
        assert_eq!(
            config.resource_files,
            vec!["auth", "pagination", "passwords", "validation"]
        );
        assert_eq!(config.lang_dir(), PathBuf::from("resources/lang"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_overrides_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("publish.yaml");
        fs::write(&path, "pack_root: packs\nlocale: de\nmax_prompt_attempts: 2\n").unwrap();

        let config = PublishConfig::load(&path).unwrap();
        assert_eq!(config.pack_root, PathBuf::from("packs"));
        assert_eq!(config.locale, Lang::De);
        assert_eq!(config.max_prompt_attempts, 2);
        assert_eq!(config.resource_extension, "php");
    }

    #[test]
    fn json_config_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("publish.json");
        fs::write(&path, r#"{"resource_root": "app/resources", "resource_files": ["auth"]}"#)
            .unwrap();

        let config = PublishConfig::load(&path).unwrap();
        assert_eq!(config.lang_dir(), PathBuf::from("app/resources/lang"));
        assert_eq!(config.resource_files, vec!["auth"]);
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("publish.toml");
        fs::write(&path, "pack_root = 'x'").unwrap();
        assert!(PublishConfig::load(&path).is_err());
    }

    #[test]
    fn zero_attempts_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("publish.yaml");
        fs::write(&path, "max_prompt_attempts: 0\n").unwrap();
        assert!(PublishConfig::load(&path).is_err());
    }
}

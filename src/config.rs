use crate::error::{FolioError, Result};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".folio.yml";

pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/assets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSettings {
    /// YAML catalog replacing the built-in content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Email-delivery settings. Credentials are never part of the source tree;
/// they come from this file or from the `FOLIO_EMAIL_*` environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Defaults to the profile name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    /// Transport timeout. Unset leaves the client default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_EMAIL_ENDPOINT.to_string()
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: None,
            template_id: None,
            public_key: None,
            recipient_name: None,
            timeout_secs: None,
        }
    }
}

/// Credentials for the email-delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Values taken from the command line or environment, overriding the file.
#[derive(Debug, Clone, Default)]
pub struct ContactOverrides {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl ContactSettings {
    pub fn apply(&mut self, overrides: ContactOverrides) {
        if overrides.service_id.is_some() {
            self.service_id = overrides.service_id;
        }
        if overrides.template_id.is_some() {
            self.template_id = overrides.template_id;
        }
        if overrides.public_key.is_some() {
            self.public_key = overrides.public_key;
        }
    }

    pub fn credentials(&self) -> Result<EmailCredentials> {
        fn required(value: &Option<String>, name: &str) -> Result<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| FolioError::Config(format!("contact.{} is not set", name)))
        }

        Ok(EmailCredentials {
            service_id: required(&self.service_id, "service_id")?,
            template_id: required(&self.template_id, "template_id")?,
            public_key: required(&self.public_key, "public_key")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub default: ThemeMode,
}

impl FolioConfig {
    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: FolioConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| FolioError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Walks up from `start_path` looking for `.folio.yml`.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Loads the explicit config, else the nearest `.folio.yml`, else defaults
    /// rooted at `start_path`.
    pub fn discover(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, PathBuf)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(FolioError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path);
        }
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                Self::load(&path)
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn content_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.content.path.as_ref().map(|p| project_root.join(p))
    }

    pub fn assets_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.server.assets_dir.as_ref().map(|p| project_root.join(p))
    }
}

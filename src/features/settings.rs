//! Application settings persistence
//!
//! Handles saving and loading desk configuration. Environment variables
//! override the file for deployment-specific values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::draw::DrawConfig;

/// Environment variable overriding [`ApiSettings::base_url`]
pub const ENV_API_URL: &str = "EVREADY_API_URL";
/// Environment variable overriding [`AdminSettings::email`]
pub const ENV_ADMIN_EMAIL: &str = "EVREADY_ADMIN_EMAIL";
/// Environment variable overriding [`AdminSettings::pin`]
pub const ENV_ADMIN_PIN: &str = "EVREADY_ADMIN_PIN";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection
    pub api: ApiSettings,
    /// Lucky draw admin credentials
    pub admin: AdminSettings,
    /// Draw timing
    pub draw: DrawConfig,
    /// Registration form options
    pub registration: RegistrationSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Sound cues
    pub audio: AudioSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL the `/api/...` paths are appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Admin gate credentials
///
/// Empty values never match, so a fresh install has the draw locked until
/// credentials are configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    pub email: String,
    pub pin: String,
}

/// One "How did you hear about EVREADY?" choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponOption {
    /// Value sent to the backend as `couponId`
    pub value: String,
    /// Label shown in the picker
    pub label: String,
}

impl CouponOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl std::fmt::Display for CouponOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Registration form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    pub coupon_options: Vec<CouponOption>,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            coupon_options: vec![
                CouponOption::new("SOCIAL_MEDIA", "Social Media"),
                CouponOption::new("NEWSPAPER", "Newspaper"),
                CouponOption::new("FRIENDS", "Friends & Family"),
                CouponOption::new("WEBSITE", "Website"),
                CouponOption::new("DEALER", "EV Dealer"),
                CouponOption::new("OTHER", "Other"),
            ],
        }
    }
}

/// Display and interface settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

/// Sound cue settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Start with all cues muted
    pub muted: bool,
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("in", "evready", "EVready")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file (or defaults), then apply environment overrides
    pub fn load() -> Self {
        let mut settings = Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(SettingsError::Io(_)) => None,
                Err(e) => {
                    tracing::warn!("Ignoring settings file {:?}: {}", path, e);
                    None
                }
            })
            .unwrap_or_default();
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Apply overrides from a variable lookup; blank values are ignored
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            tracing::info!("API base URL overridden from environment");
            self.api.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(email) = get(ENV_ADMIN_EMAIL) {
            self.admin.email = email.trim().to_string();
        }
        if let Some(pin) = get(ENV_ADMIN_PIN) {
            self.admin.pin = pin.trim().to_string();
        }
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#![forbid(unsafe_code)]

//! Environment-driven host configuration.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `EMOJIPICK_RENDER_MODE` | `auto`, `native`, `spritesheet` | `auto` |
//! | `EMOJIPICK_RECENTS_KEY` | non-empty string | `emojipick__recents` |
//! | `EMOJIPICK_STORAGE_PATH` | file path | unset (memory storage) |
//!
//! Parsing never fails. Invalid values keep the default and are reported as
//! [`ConfigError`] diagnostics.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::recents::DEFAULT_RECENTS_KEY;
use crate::render::{EmojiSupport, RenderMode};
use crate::storage::{FileStorage, MemoryStorage, Storage};

pub const ENV_RENDER_MODE: &str = "EMOJIPICK_RENDER_MODE";
pub const ENV_RECENTS_KEY: &str = "EMOJIPICK_RECENTS_KEY";
pub const ENV_STORAGE_PATH: &str = "EMOJIPICK_STORAGE_PATH";

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Render mode override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderModeSetting {
    /// Use the host's [`EmojiSupport`].
    #[default]
    Auto,
    /// Force a mode.
    Forced(RenderMode),
}

impl RenderModeSetting {
    fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        RenderMode::parse(value).map(Self::Forced)
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEnvConfig {
    pub render_mode: RenderModeSetting,
    pub recents_key: String,
    pub storage_path: Option<PathBuf>,
}

impl Default for PickerEnvConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderModeSetting::Auto,
            recents_key: DEFAULT_RECENTS_KEY.to_owned(),
            storage_path: None,
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct PickerEnvConfigParse {
    pub config: PickerEnvConfig,
    pub errors: Vec<ConfigError>,
}

impl PickerEnvConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> PickerEnvConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config through an injectable lookup.
    pub fn from_env_with<F>(mut get: F) -> PickerEnvConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_RENDER_MODE) {
            match RenderModeSetting::parse(&value) {
                Some(parsed) => config.render_mode = parsed,
                None => errors.push(ConfigError::new(
                    "render_mode",
                    value,
                    "expected auto|native|spritesheet",
                )),
            }
        }

        if let Some(value) = get(ENV_RECENTS_KEY) {
            if value.trim().is_empty() {
                errors.push(ConfigError::new("recents_key", value, "must not be empty"));
            } else {
                config.recents_key = value;
            }
        }

        if let Some(value) = get(ENV_STORAGE_PATH) {
            if value.trim().is_empty() {
                errors.push(ConfigError::new("storage_path", value, "must not be empty"));
            } else {
                config.storage_path = Some(PathBuf::from(value));
            }
        }

        if let Err(mut invalid) = config.validate() {
            errors.append(&mut invalid);
        }

        PickerEnvConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.recents_key.trim().is_empty() {
            errors.push(ConfigError::new(
                "recents_key",
                self.recents_key.clone(),
                "must not be empty",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Emoji capability after applying the override to `host`.
    #[must_use]
    pub fn emoji_support(&self, host: EmojiSupport) -> EmojiSupport {
        match self.render_mode {
            RenderModeSetting::Auto => host,
            RenderModeSetting::Forced(RenderMode::Native) => EmojiSupport::Always,
            RenderModeSetting::Forced(RenderMode::SpriteSheet) => EmojiSupport::Never,
        }
    }

    /// Storage backend for recents.
    #[must_use]
    pub fn storage(&self) -> Box<dyn Storage> {
        match &self.storage_path {
            Some(path) => Box::new(FileStorage::new(path)),
            None => Box::new(MemoryStorage::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(pairs: &[(&str, &str)]) -> PickerEnvConfigParse {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        PickerEnvConfig::from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let parsed = parse(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, PickerEnvConfig::default());
        assert_eq!(parsed.config.recents_key, "emojipick__recents");
    }

    #[test]
    fn reads_all_fields() {
        let parsed = parse(&[
            (ENV_RENDER_MODE, "spritesheet"),
            (ENV_RECENTS_KEY, "my-app__recents"),
            (ENV_STORAGE_PATH, "/tmp/emoji.json"),
        ]);
        assert!(parsed.errors.is_empty());
        assert_eq!(
            parsed.config.render_mode,
            RenderModeSetting::Forced(RenderMode::SpriteSheet)
        );
        assert_eq!(parsed.config.recents_key, "my-app__recents");
        assert_eq!(
            parsed.config.storage_path,
            Some(PathBuf::from("/tmp/emoji.json"))
        );
    }

    #[test]
    fn invalid_values_are_diagnosed() {
        let parsed = parse(&[(ENV_RENDER_MODE, "hologram"), (ENV_RECENTS_KEY, "  ")]);
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].field, "render_mode");
        assert_eq!(
            parsed.errors[0].to_string(),
            "render_mode=hologram (expected auto|native|spritesheet)"
        );
        assert_eq!(parsed.errors[1].field, "recents_key");
        assert_eq!(parsed.config, PickerEnvConfig::default());
    }

    #[test]
    fn override_applies_to_support() {
        let mut config = PickerEnvConfig::default();
        assert_eq!(
            config.emoji_support(EmojiSupport::Never).resolve(),
            RenderMode::SpriteSheet
        );
        config.render_mode = RenderModeSetting::Forced(RenderMode::Native);
        assert_eq!(
            config.emoji_support(EmojiSupport::Never).resolve(),
            RenderMode::Native
        );
    }

    #[test]
    fn validate_rejects_blank_key() {
        let config = PickerEnvConfig {
            recents_key: String::new(),
            ..PickerEnvConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().len(), 1);
    }
}

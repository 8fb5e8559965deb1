//! Where stored variables live on disk.
//!
//! Settings are layered: built-in defaults, then an optional settings file
//! (`<config dir>/configvars/settings.toml`, or any other format the `config`
//! crate recognizes by extension), then `CONFIGVARS_*` environment variables:
//!
//! * `CONFIGVARS_STORAGE_DIR` – directory holding one file per storage name
//! * `CONFIGVARS_FILE_NAME` – file-name template, must contain `{name}`

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigvarsError, Result};

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const DEFAULT_FILE_NAME: &str = "{name}.json";
const ENV_PREFIX: &str = "CONFIGVARS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    storage_dir: PathBuf,
    file_name: String,
}

impl Settings {
    pub fn new(storage_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Result<Self> {
        let settings = Self {
            storage_dir: storage_dir.into(),
            file_name: file_name.into(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults overridden by the settings file in the platform config
    /// directory and by the environment.
    pub fn load() -> Result<Self> {
        let file = platform_config_dir().map(|dir| dir.join("configvars").join("settings"));
        Self::load_from(file.as_deref())
    }

    /// Like [`Settings::load`] but with an explicit settings file (which may be absent).
    pub fn load_from(settings_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().set_default("file_name", DEFAULT_FILE_NAME)?;
        // without a platform directory, storage_dir must come from the file or environment
        if let Some(dir) = default_storage_dir() {
            builder = builder.set_default("storage_dir", dir.to_string_lossy().into_owned())?;
        }
        if let Some(path) = settings_file {
            debug!(path = %path.display(), "reading settings file");
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file storing the variables of `name`, always inside the storage directory.
    ///
    /// Names may contain `/` to nest files, but must be relative and must not
    /// climb out with `..`.
    pub fn location(&self, name: &str) -> Result<PathBuf> {
        let escapes = Path::new(name).components().any(|c| {
            matches!(c, Component::Prefix(_) | Component::RootDir | Component::ParentDir)
        });
        if name.is_empty() || escapes {
            return Err(ConfigvarsError::InvalidName(name.to_string()));
        }
        Ok(self.storage_dir.join(self.file_name.replace(NAME_PLACEHOLDER, name)))
    }

    fn validate(&self) -> Result<()> {
        if !self.file_name.contains(NAME_PLACEHOLDER) {
            return Err(ConfigvarsError::Config(format!(
                "file name template {:?} does not contain {}",
                self.file_name, NAME_PLACEHOLDER
            )));
        }
        if self.file_name.contains('/') {
            return Err(ConfigvarsError::Config(format!(
                "file name template {:?} must not contain '/'",
                self.file_name
            )));
        }
        Ok(())
    }
}

fn default_storage_dir() -> Option<PathBuf> {
    platform_config_dir().map(|dir| dir.join("configvars").join("store"))
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }
}

//! JSON persistence of variable sets, one file per storage name.

use serde_json::{Map, Value};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{ConfigvarsError, Result};
use crate::settings::Settings;
use crate::variables::VariableSet;

/// The file associated with `name`.
pub fn location(name: &str, settings: &Settings) -> Result<PathBuf> {
    settings.location(name)
}

/// Writes `vars` to the file for `name`, replacing any previous content.
/// Missing directories on the way are created.
pub fn store(name: &str, vars: &VariableSet, settings: &Settings) -> Result<PathBuf> {
    let path = location(name, settings)?;
    debug!(name, path = %path.display(), "storing variables");
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ConfigvarsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let file = fs::File::create(&path).map_err(|source| ConfigvarsError::Io {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, vars).map_err(|e| {
        if e.is_io() {
            ConfigvarsError::Io {
                path: path.clone(),
                source: e.into(),
            }
        } else {
            ConfigvarsError::Json(e)
        }
    })?;
    writer.flush().map_err(|source| ConfigvarsError::Io {
        path: path.clone(),
        source,
    })?;
    info!(name, count = vars.len(), path = %path.display(), "stored variables");
    Ok(path)
}

/// Reads the variables stored for `name`.
pub fn load(name: &str, settings: &Settings) -> Result<Map<String, Value>> {
    let path = location(name, settings)?;
    debug!(name, path = %path.display(), "loading variables");
    let file = match fs::File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigvarsError::NameNotFound(name.to_string()));
        }
        Err(source) => return Err(ConfigvarsError::Io { path, source }),
    };
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigvarsError::DataCorruption {
            path,
            message: format!("expected a JSON object, found {}", other),
        }),
    }
}

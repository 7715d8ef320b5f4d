use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Resolved `--data-dir`, fixed for the life of the process.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

/// The configured data directory, or `./config` when none was set (tests).
pub fn get_data_dir() -> Result<PathBuf> {
    match DATA_DIR.get() {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()
            .context("cannot resolve current directory")?
            .join("config")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn name(self) -> &'static str {
        match self {
            FileFormat::Json => "JSON",
            FileFormat::Yaml => "YAML",
        }
    }
}

/// A document stored as one file in the data directory. A missing file loads as
/// `Default`, so a fresh directory behaves like an empty form with stock settings.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
    fn format() -> FileFormat;

    fn decode(contents: &str, path: &Path) -> Result<Self> {
        let parsed = match Self::format() {
            FileFormat::Json => serde_json::from_str(contents).map_err(anyhow::Error::from),
            FileFormat::Yaml => serde_norway::from_str(contents).map_err(anyhow::Error::from),
        };
        parsed.with_context(|| format!("{} in {} is invalid", Self::format().name(), path.display()))
    }

    fn encode(&self) -> Result<String> {
        let encoded = match Self::format() {
            FileFormat::Json => serde_json::to_string_pretty(self).map_err(anyhow::Error::from),
            FileFormat::Yaml => serde_norway::to_string(self).map_err(anyhow::Error::from),
        };
        encoded.with_context(|| format!("cannot encode {} as {}", Self::filename(), Self::format().name()))
    }

    fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    fn save(&self) -> Result<()> {
        self.save_to(&get_data_dir()?)
    }

    fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            debug!(path = %path.display(), "no file, using defaults");
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;
        let value = Self::decode(&contents, &path)?;
        info!(path = %path.display(), "loaded");
        Ok(value)
    }

    /// Writes next to the target then renames over it, so an interrupted save
    /// leaves the previous file intact.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
        let path = dir.join(Self::filename());
        let staging = dir.join(format!(".{}.tmp", Self::filename()));
        fs::write(&staging, self.encode()?)
            .with_context(|| format!("cannot write {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("cannot replace {}", path.display()))?;
        info!(path = %path.display(), "saved");
        Ok(())
    }
}

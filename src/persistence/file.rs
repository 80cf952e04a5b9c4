//! File-backed storage for native builds
//!
//! Values live in a versioned JSON envelope. Writes go to a temp file that is
//! then renamed over the save, so a crash never leaves a half-written file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::Storage;

/// Current envelope format version
const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    values: BTreeMap<String, f64>,
}

/// Key/value storage persisted to a JSON file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, f64>,
}

impl FileStorage {
    /// Open storage at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match parse_envelope(&json) {
                Ok(values) => {
                    log::info!("Loaded {} stored values from {}", values.len(), path.display());
                    values
                }
                Err(err) => {
                    log::warn!("Ignoring unreadable save {}: {err:#}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

fn parse_envelope(json: &str) -> Result<BTreeMap<String, f64>> {
    let envelope: Envelope = serde_json::from_str(json).context("malformed envelope")?;
    if envelope.version != ENVELOPE_VERSION {
        bail!("unsupported save version {}", envelope.version);
    }
    Ok(envelope.values)
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            log::warn!("Failed to save {key}: {err:#}");
        }
    }
}

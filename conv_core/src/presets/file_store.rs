//! # File-backed Preset Store
//!
//! One `<uuid>.json` file per preset in a single directory, written with
//! the same safety features as any document save:
//! - **Atomic saves**: write to `.json.tmp`, fsync, rename over the target
//! - **Directory lock**: an OS-level exclusive lock on `.presets.lock`
//!   held for the lifetime of the store. The lock file is never removed.
//! - **Version validation**: presets from a newer schema are rejected
//!
//! ## Example
//!
//! ```rust,no_run
//! use conv_core::presets::{FileLayoutStore, LayoutStore, PresetLayout};
//!
//! let mut store = FileLayoutStore::open("presets")?;
//! let preset = PresetLayout::new("Chiller plant");
//! store.save(&preset)?;
//! assert_eq!(store.load(preset.id)?.name, "Chiller plant");
//! # Ok::<(), conv_core::errors::ConvError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::store::{sort_summaries, LayoutStore, PresetSummary};
use super::{PresetLayout, PRESET_SCHEMA_VERSION};
use crate::errors::{ConvError, ConvResult};

const LOCK_FILE_NAME: &str = ".presets.lock";

/// Directory of JSON preset files guarded by an exclusive lock.
///
/// The lock is released when the store is dropped.
#[derive(Debug)]
pub struct FileLayoutStore {
    dir: PathBuf,
    /// Holds the OS lock until dropped
    _lock_file: File,
}

impl FileLayoutStore {
    /// Open (creating if needed) a preset directory and lock it.
    ///
    /// Returns `ConvError::FileLocked` when another process holds the lock.
    pub fn open(dir: impl AsRef<Path>) -> ConvResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| ConvError::file_error("create directory", dir.display().to_string(), e.to_string()))?;

        let lock_path = dir.join(LOCK_FILE_NAME);
        let mut lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| ConvError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        if lock_file.try_lock_exclusive().is_err() {
            let holder = fs::read_to_string(&lock_path)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "another process".to_string());
            warn!(path = %dir.display(), locked_by = %holder, "preset directory is locked");
            return Err(ConvError::file_locked(dir.display().to_string(), holder));
        }

        // Holder info is informational only; the OS lock is what counts
        let _ = lock_file
            .set_len(0)
            .and_then(|_| write!(lock_file, "pid {}", std::process::id()));

        debug!(path = %dir.display(), "opened preset directory");
        Ok(FileLayoutStore {
            dir,
            _lock_file: lock_file,
        })
    }

    /// Directory this store reads and writes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn read_preset(path: &Path) -> ConvResult<PresetLayout> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConvError::file_error("read", path.display().to_string(), e.to_string()))?;
        let preset: PresetLayout = serde_json::from_str(&contents)
            .map_err(|e| ConvError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;
        validate_version(&preset.version)?;
        Ok(preset)
    }
}

impl LayoutStore for FileLayoutStore {
    fn save(&mut self, preset: &PresetLayout) -> ConvResult<()> {
        let path = self.path_for(preset.id);
        let json = serde_json::to_string_pretty(preset)?;

        let tmp_path = path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path)
            .map_err(|e| ConvError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;
        tmp_file
            .write_all(json.as_bytes())
            .map_err(|e| ConvError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;
        tmp_file
            .sync_all()
            .map_err(|e| ConvError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ConvError::file_error("rename to final", path.display().to_string(), e.to_string())
        })?;

        info!(id = %preset.id, name = %preset.name, "saved preset");
        Ok(())
    }

    fn load(&self, id: Uuid) -> ConvResult<PresetLayout> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ConvError::not_found("Preset", id.to_string()));
        }
        Self::read_preset(&path)
    }

    fn list(&self) -> ConvResult<Vec<PresetSummary>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| ConvError::file_error("list", self.dir.display().to_string(), e.to_string()))?;

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // One bad file should not hide the rest
            match Self::read_preset(&path) {
                Ok(preset) => summaries.push(PresetSummary::from(&preset)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable preset"),
            }
        }
        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn delete(&mut self, id: Uuid) -> ConvResult<()> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ConvError::not_found("Preset", id.to_string()));
        }
        fs::remove_file(&path)
            .map_err(|e| ConvError::file_error("delete", path.display().to_string(), e.to_string()))?;
        info!(%id, "deleted preset");
        Ok(())
    }
}

/// Validate that a stored version is compatible with the current schema.
fn validate_version(file_version: &str) -> ConvResult<()> {
    let mismatch = || ConvError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: PRESET_SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = PRESET_SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x, a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

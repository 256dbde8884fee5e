//! Manifest and version record persistence
//!
//! The manifest is owned by the host project; only its `version` field is
//! ever rewritten. The version record is this tool's own state file.

use crate::config::Settings;
use crate::error::{StoreError, StoreResult, VersionError, VersionResult};
use crate::version::Version;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Manifest field holding the plain version string
const VERSION_FIELD: &str = "version";

/// A project manifest document
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest contents read from `path`
    pub fn parse(contents: &str, path: &Path) -> StoreResult<Self> {
        let value: Value =
            serde_json::from_str(contents).map_err(|source| StoreError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(document) => Ok(Manifest { document }),
            _ => Err(StoreError::ManifestNotObject(path.to_path_buf())),
        }
    }

    /// The manifest's plain version string
    pub fn version(&self) -> VersionResult<&str> {
        self.document
            .get(VERSION_FIELD)
            .and_then(Value::as_str)
            .ok_or(VersionError::MissingVersion)
    }

    /// A copy of this manifest with its version field replaced
    pub fn with_version(&self, version: &str) -> Manifest {
        let mut document = self.document.clone();
        document.insert(VERSION_FIELD.to_string(), Value::String(version.to_string()));
        Manifest { document }
    }

    /// The full document
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

/// Everything loaded from disk at the start of a run
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub manifest: Manifest,
    /// `None` when the record file is missing or unreadable
    pub record: Option<Version>,
}

/// Reads and writes the manifest and version record in one directory
#[derive(Debug, Clone)]
pub struct VersionStore {
    manifest_path: PathBuf,
    record_path: PathBuf,
}

impl VersionStore {
    /// Create a store for explicit file paths
    pub fn new(manifest_path: PathBuf, record_path: PathBuf) -> Self {
        VersionStore {
            manifest_path,
            record_path,
        }
    }

    /// Create a store from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.manifest_path(), settings.record_path())
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    /// Load the manifest and, when present, the version record
    pub fn load(&self) -> StoreResult<ProjectState> {
        let manifest = self.load_manifest()?;
        let record = self.load_record();
        Ok(ProjectState { manifest, record })
    }

    /// Load the manifest, failing if it is missing or not a JSON object
    pub fn load_manifest(&self) -> StoreResult<Manifest> {
        let contents =
            fs::read_to_string(&self.manifest_path).map_err(|source| StoreError::ManifestRead {
                path: self.manifest_path.clone(),
                source,
            })?;

        Manifest::parse(&contents, &self.manifest_path)
    }

    /// Load the version record, treating any failure as absence
    pub fn load_record(&self) -> Option<Version> {
        let contents = match fs::read_to_string(&self.record_path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.record_path.display(), error = %e, "version record not readable");
                return None;
            }
        };

        let record: Version = match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(e) => {
                debug!(path = %self.record_path.display(), error = %e, "version record not parsable");
                return None;
            }
        };

        if record.platform.trim().is_empty() {
            debug!(path = %self.record_path.display(), "version record has a blank platform");
            return None;
        }

        Some(record)
    }

    /// Persist the manifest and version record together
    ///
    /// Both documents are written to sibling temp files first, then renamed
    /// into place. If the manifest cannot be put in place, the previous
    /// record is restored.
    pub fn save(&self, manifest: &Manifest, record: &Version) -> StoreResult<()> {
        let record_json = to_tabbed_json(record, &self.record_path)?;
        let manifest_json = to_tabbed_json(manifest.document(), &self.manifest_path)?;

        let record_tmp = write_temp(&self.record_path, &record_json)?;
        let manifest_tmp = match write_temp(&self.manifest_path, &manifest_json) {
            Ok(path) => path,
            Err(e) => {
                let _ = fs::remove_file(&record_tmp);
                return Err(e);
            }
        };

        let previous_record = fs::read(&self.record_path).ok();

        if let Err(e) = rename(&record_tmp, &self.record_path) {
            let _ = fs::remove_file(&record_tmp);
            let _ = fs::remove_file(&manifest_tmp);
            return Err(e);
        }

        if let Err(e) = rename(&manifest_tmp, &self.manifest_path) {
            let _ = fs::remove_file(&manifest_tmp);
            let restored = match previous_record {
                Some(bytes) => fs::write(&self.record_path, bytes),
                None => fs::remove_file(&self.record_path),
            };
            if let Err(restore) = restored {
                warn!(path = %self.record_path.display(), error = %restore, "failed to restore version record");
            }
            return Err(e);
        }

        debug!(
            manifest = %self.manifest_path.display(),
            record = %self.record_path.display(),
            "saved version files"
        );
        Ok(())
    }
}

/// Serialize with tab indentation and a trailing newline
fn to_tabbed_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> StoreResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    let mut json = String::from_utf8_lossy(&buf).into_owned();
    json.push('\n');
    Ok(json)
}

/// `<path>.tmp`, next to the file it replaces
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_temp(path: &Path, contents: &str) -> StoreResult<PathBuf> {
    let tmp = temp_path(path);
    fs::write(&tmp, contents).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tmp)
}

fn rename(from: &Path, to: &Path) -> StoreResult<()> {
    fs::rename(from, to).map_err(|source| StoreError::Write {
        path: to.to_path_buf(),
        source,
    })
}

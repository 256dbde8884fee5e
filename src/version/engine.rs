//! Version state transitions
//!
//! Given what was loaded from disk and the requested bumps, compute the next
//! version record and manifest. Nothing here touches the filesystem; the
//! platform tag is pulled from a [`PlatformSource`] only when a record has
//! to be derived.

use crate::error::{Result, VersionResult};
use crate::version::{Component, Manifest, PlatformSource, ProjectState, Version, VersionCore};
use tracing::debug;

/// How a stored record relates to the manifest's version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The record's major.core.minor equals the manifest version
    InSync(Version),
    /// The manifest changed since the record was written
    Diverged { stale: Version, manifest: VersionCore },
    /// No record was stored
    Missing { manifest: VersionCore },
}

/// Compare a stored record against the manifest's plain version
///
/// The manifest version is always validated, even when a record is in sync.
pub fn reconcile(manifest_version: &str, record: Option<Version>) -> VersionResult<Reconciliation> {
    let manifest: VersionCore = manifest_version.parse()?;

    Ok(match record {
        Some(record) if record.matches(manifest_version) => Reconciliation::InSync(record),
        Some(stale) => Reconciliation::Diverged { stale, manifest },
        None => Reconciliation::Missing { manifest },
    })
}

/// Apply each requested bump once, in major, core, minor order
pub fn apply_bumps(version: Version, bumps: &[Component]) -> VersionResult<Version> {
    Component::ALL
        .into_iter()
        .filter(|component| bumps.contains(component))
        .try_fold(version, Version::bump)
}

/// The state to persist at the end of a run
#[derive(Debug, Clone)]
pub struct NextState {
    pub manifest: Manifest,
    pub record: Version,
    /// The stored record discarded because the manifest changed under it
    pub discarded: Option<Version>,
    /// Whether the record was derived from the manifest on this run
    pub derived: bool,
}

/// Compute the next record and manifest
///
/// 1. An in-sync record gets its build counter incremented; a missing or
///    diverged record is derived afresh from the manifest with build 0.
/// 2. Requested bumps are applied, each resetting the build counter.
/// 3. The manifest's version field is set to the plain version.
pub fn advance(
    state: &ProjectState,
    bumps: &[Component],
    platform: &mut dyn PlatformSource,
) -> Result<NextState> {
    let manifest_version = state.manifest.version()?;

    let (base, discarded, derived) = match reconcile(manifest_version, state.record.clone())? {
        Reconciliation::InSync(record) => (record.next_build()?, None, false),
        Reconciliation::Diverged { stale, manifest } => {
            debug!(stale = %stale.plain(), manifest = %manifest, "version record out of sync");
            (Version::derive(manifest, platform.platform()?), Some(stale), true)
        }
        Reconciliation::Missing { manifest } => {
            debug!(manifest = %manifest, "no version record, deriving one");
            (Version::derive(manifest, platform.platform()?), None, true)
        }
    };

    let record = apply_bumps(base, bumps)?;
    let manifest = state.manifest.with_version(&record.plain());

    Ok(NextState {
        manifest,
        record,
        discarded,
        derived,
    })
}

//! Core version types
//!
//! This module defines the version record persisted next to the manifest and
//! the string renderings derived from it.

use crate::error::{VersionError, VersionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three numeric components of a plain `major.core.minor` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionCore {
    pub major: u64,
    pub core: u64,
    pub minor: u64,
}

impl VersionCore {
    pub fn new(major: u64, core: u64, minor: u64) -> Self {
        VersionCore { major, core, minor }
    }
}

impl FromStr for VersionCore {
    type Err = VersionError;

    fn from_str(s: &str) -> VersionResult<Self> {
        let malformed = || VersionError::Malformed(s.to_string());

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            // u64::from_str accepts a leading '+', which the manifest must not carry
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *slot = part.parse().map_err(|_| malformed())?;
        }

        Ok(VersionCore::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl fmt::Display for VersionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.core, self.minor)
    }
}

/// A bumpable version component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Core,
    Minor,
}

impl Component {
    /// All components, in the order bumps are applied
    pub const ALL: [Component; 3] = [Component::Major, Component::Core, Component::Minor];

    /// The command line flag that requests this bump
    pub fn flag(self) -> &'static str {
        match self {
            Component::Major => "--major",
            Component::Core => "--core",
            Component::Minor => "--minor",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Core => "core",
            Component::Minor => "minor",
        };
        f.write_str(name)
    }
}

/// The persisted version record
///
/// Field order matches the on-disk JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub core: u64,
    pub minor: u64,
    pub platform: String,
    pub build: u64,
}

impl Version {
    /// Derive a fresh record from a plain version and a platform tag
    pub fn derive(core: VersionCore, platform: impl Into<String>) -> Self {
        Version {
            major: core.major,
            core: core.core,
            minor: core.minor,
            platform: platform.into(),
            build: 0,
        }
    }

    /// The numeric components of this record
    pub fn version_core(&self) -> VersionCore {
        VersionCore::new(self.major, self.core, self.minor)
    }

    /// Whether this record still describes the given manifest version
    pub fn matches(&self, manifest_version: &str) -> bool {
        self.plain() == manifest_version
    }

    /// Increment one component and reset the build counter
    pub fn bump(mut self, component: Component) -> VersionResult<Self> {
        let slot = match component {
            Component::Major => &mut self.major,
            Component::Core => &mut self.core,
            Component::Minor => &mut self.minor,
        };
        *slot = increment(*slot, &component.to_string())?;
        self.build = 0;
        Ok(self)
    }

    /// Increment the build counter
    pub fn next_build(mut self) -> VersionResult<Self> {
        self.build = increment(self.build, "build")?;
        Ok(self)
    }

    /// `{major}.{core}.{minor}`, the form written to the manifest
    pub fn plain(&self) -> String {
        self.version_core().to_string()
    }

    /// `{platform}{major}.{core}.{minor}-{build}`
    pub fn release(&self) -> String {
        format!("{}{}-{}", self.platform, self.plain(), self.build)
            .trim()
            .to_string()
    }

    /// `{platform}{major}.{core}.{minor}-rc{build}`
    pub fn release_candidate(&self) -> String {
        format!("{}{}-rc{}", self.platform, self.plain(), self.build)
            .trim()
            .to_string()
    }

    /// Tag name for this record
    pub fn tag(&self, release_candidate: bool) -> String {
        if release_candidate {
            self.release_candidate()
        } else {
            self.release()
        }
    }
}

fn increment(value: u64, field: &str) -> VersionResult<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::Overflow(field.to_string()))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.release())
    }
}

//! Common test utilities

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use versioner::error::{VcsError, VcsResult};
use versioner::vcs::Vcs;
use versioner::Version;

/// Create a temporary project with a package.json holding `version`
pub fn create_project(version: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let manifest = format!(
        "{{\n\t\"name\": \"demo\",\n\t\"version\": \"{}\",\n\t\"private\": true\n}}\n",
        version
    );
    fs::write(temp_dir.path().join("package.json"), manifest).unwrap();
    temp_dir
}

/// Write a version record into a project
pub fn write_record(dir: &Path, record: &Version) {
    let json = serde_json::to_string_pretty(record).unwrap();
    fs::write(dir.join("version.json"), json).unwrap();
}

pub fn read_record(dir: &Path) -> Version {
    let contents = fs::read_to_string(dir.join("version.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

pub fn read_manifest(dir: &Path) -> Value {
    let contents = fs::read_to_string(dir.join("package.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

pub fn manifest_version(dir: &Path) -> String {
    read_manifest(dir)["version"].as_str().unwrap().to_string()
}

pub fn record(major: u64, core: u64, minor: u64, platform: &str, build: u64) -> Version {
    Version {
        major,
        core,
        minor,
        platform: platform.to_string(),
        build,
    }
}

/// A [`Vcs`] that records calls instead of running git
#[derive(Debug, Default)]
pub struct RecordingVcs {
    pub calls: Vec<String>,
    pub fail_on: Option<&'static str>,
}

impl RecordingVcs {
    fn record(&mut self, step: &'static str, call: String) -> VcsResult<()> {
        self.calls.push(call);
        if self.fail_on == Some(step) {
            return Err(VcsError::StepFailed {
                step: format!("git {}", step),
                code: Some(128),
            });
        }
        Ok(())
    }
}

impl Vcs for RecordingVcs {
    fn stage_all(&mut self) -> VcsResult<()> {
        self.record("add", "add --all".to_string())
    }

    fn commit(&mut self, message: &str) -> VcsResult<()> {
        self.record("commit", format!("commit -m {}", message))
    }

    fn tag(&mut self, name: &str, message: &str) -> VcsResult<()> {
        self.record("tag", format!("tag -a {} -m {}", name, message))
    }

    fn push_tag(&mut self, remote: &str, name: &str) -> VcsResult<()> {
        self.record("push", format!("push {} {}", remote, name))
    }
}

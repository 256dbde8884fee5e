//! Settings discovery from the environment

use crate::config::types::{ColorMode, Settings};
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Optional environment file read from the working directory
pub const ENV_FILE: &str = ".env";

/// Only variables with this prefix are taken from the env file
pub const ENV_PREFIX: &str = "VERSIONER_";

pub const ENV_MANIFEST: &str = "VERSIONER_MANIFEST";
pub const ENV_RECORD: &str = "VERSIONER_RECORD";
pub const ENV_PLATFORM: &str = "VERSIONER_PLATFORM";
pub const ENV_REMOTE: &str = "VERSIONER_REMOTE";
pub const ENV_GIT: &str = "VERSIONER_GIT";
pub const ENV_COLOR: &str = "VERSIONER_COLOR";
pub const ENV_PROMPT_ATTEMPTS: &str = "VERSIONER_PROMPT_ATTEMPTS";

/// Resolve settings for the current directory
pub fn load_settings() -> ConfigResult<Settings> {
    let dir = env::current_dir().map_err(ConfigError::WorkingDir)?;
    load_settings_from(dir)
}

/// Resolve settings for a directory, consulting its `.env` file
///
/// Process variables take precedence over the file.
pub fn load_settings_from(dir: PathBuf) -> ConfigResult<Settings> {
    let file = read_env_file(&dir);
    settings_from_lookup(dir, |key| {
        env::var(key).ok().or_else(|| file.get(key).cloned())
    })
}

/// Read the `VERSIONER_*` entries of `<dir>/.env`
///
/// The process environment is not modified. A missing file yields nothing;
/// unreadable files and malformed lines are logged and skipped.
pub fn read_env_file(dir: &Path) -> HashMap<String, String> {
    let path = dir.join(ENV_FILE);
    let mut vars = HashMap::new();
    if !path.is_file() {
        return vars;
    }

    let entries = match dotenvy::from_path_iter(&path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable env file");
            return vars;
        }
    };

    for entry in entries {
        match entry {
            Ok((key, value)) if key.starts_with(ENV_PREFIX) => {
                vars.insert(key, value);
            }
            Ok(_) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "skipping env file entry"),
        }
    }
    debug!(path = %path.display(), count = vars.len(), "read env file");
    vars
}

/// Build settings from an arbitrary variable lookup
pub fn settings_from_lookup<F>(dir: PathBuf, lookup: F) -> ConfigResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::new(dir);

    if let Some(value) = non_blank(&lookup, ENV_MANIFEST)? {
        settings.manifest_file = value;
    }
    if let Some(value) = non_blank(&lookup, ENV_RECORD)? {
        settings.record_file = value;
    }
    if let Some(value) = non_blank(&lookup, ENV_PLATFORM)? {
        settings.platform = Some(value);
    }
    if let Some(value) = non_blank(&lookup, ENV_REMOTE)? {
        settings.remote = value;
    }
    if let Some(value) = non_blank(&lookup, ENV_GIT)? {
        settings.git_program = value;
    }
    if let Some(value) = lookup(ENV_COLOR) {
        settings.color = parse_color(&value)?;
    }
    if let Some(value) = lookup(ENV_PROMPT_ATTEMPTS) {
        settings.prompt_attempts = match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(invalid(ENV_PROMPT_ATTEMPTS, &value)),
        };
    }

    Ok(settings)
}

/// Parse a color mode name
pub fn parse_color(value: &str) -> ConfigResult<ColorMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(invalid(ENV_COLOR, value)),
    }
}

/// A set variable must not be blank
fn non_blank<F>(lookup: &F, key: &str) -> ConfigResult<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(invalid(key, &value)),
        other => Ok(other),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let settings = settings_from_lookup(PathBuf::from("."), lookup(&[])).unwrap();
        assert_eq!(settings, Settings::new(PathBuf::from(".")));
    }

    #[test]
    fn test_all_variables() {
        let settings = settings_from_lookup(
            PathBuf::from("/p"),
            lookup(&[
                (ENV_MANIFEST, "app.json"),
                (ENV_RECORD, ".version.json"),
                (ENV_PLATFORM, "beta-"),
                (ENV_REMOTE, "upstream"),
                (ENV_GIT, "/usr/bin/git"),
                (ENV_COLOR, "Never"),
                (ENV_PROMPT_ATTEMPTS, "5"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.manifest_path(), PathBuf::from("/p/app.json"));
        assert_eq!(settings.record_path(), PathBuf::from("/p/.version.json"));
        assert_eq!(settings.platform, Some("beta-".to_string()));
        assert_eq!(settings.remote, "upstream");
        assert_eq!(settings.git_program, "/usr/bin/git");
        assert_eq!(settings.color, ColorMode::Never);
        assert_eq!(settings.prompt_attempts, 5);
    }

    #[test]
    fn test_blank_platform_rejected() {
        let result = settings_from_lookup(PathBuf::from("."), lookup(&[(ENV_PLATFORM, "  ")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_invalid_color_and_attempts() {
        let result = settings_from_lookup(PathBuf::from("."), lookup(&[(ENV_COLOR, "rainbow")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result =
            settings_from_lookup(PathBuf::from("."), lookup(&[(ENV_PROMPT_ATTEMPTS, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_env_file_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_env_file(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_env_file_keeps_own_prefix_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(ENV_FILE),
            "VERSIONER_PLATFORM=web-\nPATH=/nowhere\nVERSIONER_TEST_ENV_FILE_ONLY=yes\n",
        )
        .unwrap();

        let vars = read_env_file(temp_dir.path());
        assert_eq!(vars.get(ENV_PLATFORM), Some(&"web-".to_string()));
        assert_eq!(vars.get("VERSIONER_TEST_ENV_FILE_ONLY"), Some(&"yes".to_string()));
        assert!(!vars.contains_key("PATH"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_env_file_leaves_process_environment_alone() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(ENV_FILE),
            "VERSIONER_TEST_ENV_FILE_UNSET=yes\n",
        )
        .unwrap();

        let vars = read_env_file(temp_dir.path());
        assert_eq!(vars.len(), 1);
        assert!(env::var("VERSIONER_TEST_ENV_FILE_UNSET").is_err());
    }

    #[test]
    fn test_env_file_malformed_line_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(ENV_FILE),
            "VERSIONER_REMOTE=upstream\nnot a valid line\n",
        )
        .unwrap();

        let settings = load_settings_from(temp_dir.path().to_path_buf());
        assert!(settings.is_ok());
        let vars = read_env_file(temp_dir.path());
        assert_eq!(vars.get(ENV_REMOTE), Some(&"upstream".to_string()));
    }
}

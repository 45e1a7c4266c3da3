//! Configuration stored in `listflip.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::challenge::{BUILTIN, Challenge, Transform};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "listflip.toml";

/// How `run` prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One Python-rendered line per invocation.
    #[default]
    Text,
    /// One JSON object per challenge.
    Json,
}

/// listflip configuration (TOML).
///
/// Missing fields fall back to the built-in fixtures and text output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,

    #[serde(rename = "challenge")]
    pub challenges: Vec<ChallengeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeConfig {
    pub name: String,
    pub transform: Transform,
    /// Literal list arguments, one per invocation (e.g. `"[True, False]"`).
    pub invocations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            challenges: BUILTIN
                .iter()
                .map(|(name, transform, literals)| ChallengeConfig {
                    name: name.to_string(),
                    transform: *transform,
                    invocations: literals.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for challenge in &self.challenges {
            validate_name(&challenge.name)?;
            if !seen.insert(challenge.name.as_str()) {
                return Err(anyhow!("duplicate challenge name '{}'", challenge.name));
            }
            challenge.build()?;
        }
        Ok(())
    }

    /// Parse every configured challenge.
    pub fn challenges(&self) -> Result<Vec<Challenge>> {
        self.challenges.iter().map(ChallengeConfig::build).collect()
    }
}

impl ChallengeConfig {
    pub fn build(&self) -> Result<Challenge> {
        Challenge::from_literals(&self.name, self.transform, &self.invocations)
            .with_context(|| format!("challenge '{}'", self.name))
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("challenge name must not be empty"));
    }
    if name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Err(anyhow!(
            "challenge name must be [A-Za-z0-9_] only (got '{name}')"
        ));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &Config) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config, refusing to overwrite unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "listflip init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    write_config(path, &Config::default())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.challenges.len(), 2);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("listflip.toml");
        let cfg = Config::default();
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn parses_handwritten_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("listflip.toml");
        fs::write(
            &path,
            r#"
format = "json"

[[challenge]]
name = "shout"
transform = "strings"
invocations = ["['hey', 'you']"]
"#,
        )
        .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.format, OutputFormat::Json);
        let challenges = cfg.challenges().expect("challenges");
        assert_eq!(challenges[0].name, "shout");
        assert_eq!(challenges[0].transform, Transform::UpperStrings);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut cfg = Config::default();
        cfg.challenges.push(cfg.challenges[0].clone());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate challenge name"));
    }

    #[test]
    fn rejects_invalid_names_and_literals() {
        let mut cfg = Config::default();
        cfg.challenges[0].name = "has space".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.challenges[1].invocations.push("['unterminated]".to_string());
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err:#}").contains("string_array_test"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("listflip.toml");
        init_config(&path, false).expect("first init");
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).expect("forced init");
    }
}

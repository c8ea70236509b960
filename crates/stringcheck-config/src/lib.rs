use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stringcheck.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringCheckConfig {
    pub resources_path: Option<String>,
    pub report: Option<ReportCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportCfg {
    pub webhook: Option<String>,
    /// Same string convention as the CLI flag: unset/empty means false.
    pub report_to_remote: Option<String>,
    pub payload: Option<String>,
    pub dedupe_syntax_tokens: Option<bool>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean value `{0}` (expected true/false, yes/no, on/off, 1/0)")]
    InvalidBool(String),
}

/// Parse a boolean switch given as a string. Unset or blank means `false`.
pub fn parse_flag(value: Option<&str>) -> Result<bool, ConfigError> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "off" => Ok(false),
        "true" | "1" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidBool(raw.to_string())),
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(p) = std::env::current_dir() {
        out.push(p.join(CONFIG_FILE_NAME));
    }
    if let Some(base) = dirs::config_dir() {
        out.push(base.join("stringcheck").join(CONFIG_FILE_NAME));
    }
    out
}

/// Search order: CWD/stringcheck.toml, then the user config dir. Earlier
/// files win field by field.
pub fn load_config() -> Result<StringCheckConfig, ConfigError> {
    Ok(load_from(&candidate_paths()))
}

pub fn load_from(paths: &[PathBuf]) -> StringCheckConfig {
    let mut merged = StringCheckConfig::default();
    for path in paths {
        if let Some(cfg) = read_config(path) {
            merged = merge(merged, cfg);
        }
    }
    merged
}

fn read_config(path: &Path) -> Option<StringCheckConfig> {
    let s = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<StringCheckConfig>(&s) {
        Ok(cfg) => {
            tracing::debug!(event = "config_loaded", path = %path.display());
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!(event = "config_invalid", path = %path.display(), error = %e);
            None
        }
    }
}

fn merge(mut a: StringCheckConfig, b: StringCheckConfig) -> StringCheckConfig {
    if a.resources_path.is_none() {
        a.resources_path = b.resources_path;
    }
    a.report = merge_opt(a.report, b.report, merge_report);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_report(mut a: ReportCfg, b: ReportCfg) -> ReportCfg {
    if a.webhook.is_none() {
        a.webhook = b.webhook;
    }
    if a.report_to_remote.is_none() {
        a.report_to_remote = b.report_to_remote;
    }
    if a.payload.is_none() {
        a.payload = b.payload;
    }
    if a.dedupe_syntax_tokens.is_none() {
        a.dedupe_syntax_tokens = b.dedupe_syntax_tokens;
    }
    a
}

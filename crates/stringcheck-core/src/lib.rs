use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Locale every other translation set is compared against.
pub const REFERENCE_LOCALE: &str = "en";

/// Language tag of a translation set ("en", "fr", "pt-rBR").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn reference() -> Self {
        Self(REFERENCE_LOCALE.to_string())
    }

    pub fn is_reference(&self) -> bool {
        self.0 == REFERENCE_LOCALE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Key -> raw localized text, in document order.
pub type ResourceBundle = IndexMap<String, String>;

/// All loaded translation sets, keyed by locale.
pub type Bundles = IndexMap<LocaleId, ResourceBundle>;

/// One format placeholder found in a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderToken {
    /// Explicit 1-based ordinal (`%2$s` -> 2); `None` for `%s`.
    pub position: Option<u32>,
    pub conversion: char,
    /// Exact matched text; the only thing compared across locales.
    pub raw: String,
}

/// What went wrong with the placeholders of one key in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationIssue {
    CountMismatch {
        expected: usize,
        actual: usize,
    },
    TypeMismatch {
        /// 0-based index into the canonical placeholder order.
        position: usize,
        expected: String,
        actual: String,
    },
    SyntaxError {
        tokens: Vec<String>,
    },
}

impl ValidationIssue {
    /// Machine-readable kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationIssue::CountMismatch { .. } => "count-mismatch",
            ValidationIssue::TypeMismatch { .. } => "type-mismatch",
            ValidationIssue::SyntaxError { .. } => "syntax-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub key: String,
    pub locale: LocaleId,
    pub issue: ValidationIssue,
}

impl ValidationRecord {
    pub fn new(key: impl Into<String>, locale: LocaleId, issue: ValidationIssue) -> Self {
        Self {
            key: key.into(),
            locale,
            issue,
        }
    }
}

/// Fatal conditions; content problems are `ValidationRecord`s, never errors.
#[derive(Debug, Error)]
pub enum StringCheckError {
    #[error("Reference locale `{0}` is missing")]
    MissingReferenceLocale(LocaleId),
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("failed to deliver report: {0}")]
    Notify(String),
    #[error("{0}")]
    Other(String),
}

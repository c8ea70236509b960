use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stringcheck_core::{ValidationIssue, ValidationRecord};

pub const SCHEMA_VERSION: u32 = 1;

/// One validation record as printed by `validate --format json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecordMsg {
    pub schema_version: u32,
    pub kind: String,
    pub key: String,
    pub locale: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub position: Option<usize>,
    pub tokens: Vec<String>,
}

impl From<&ValidationRecord> for RecordMsg {
    fn from(r: &ValidationRecord) -> Self {
        let mut msg = RecordMsg {
            schema_version: SCHEMA_VERSION,
            kind: r.issue.kind().to_string(),
            key: r.key.clone(),
            locale: r.locale.to_string(),
            expected: None,
            actual: None,
            position: None,
            tokens: Vec::new(),
        };
        match &r.issue {
            ValidationIssue::CountMismatch { expected, actual } => {
                msg.expected = Some(expected.to_string());
                msg.actual = Some(actual.to_string());
            }
            ValidationIssue::TypeMismatch {
                position,
                expected,
                actual,
            } => {
                msg.position = Some(*position);
                msg.expected = Some(expected.clone());
                msg.actual = Some(actual.clone());
            }
            ValidationIssue::SyntaxError { tokens } => {
                msg.tokens = tokens.clone();
            }
        }
        msg
    }
}

/// One discovered resource file, as printed by `scan --format json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanBundle {
    pub schema_version: u32,
    pub path: String,
    pub locale: String,
    pub keys: usize,
}

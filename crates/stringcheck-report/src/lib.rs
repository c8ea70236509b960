//! Turns validation records into the text report and hands it out.

use indexmap::IndexMap;
use std::fmt::Write as _;
use stringcheck_core::{LocaleId, ValidationIssue, ValidationRecord};

pub mod notify;

pub use notify::{publish, Notifier, WebhookNotifier};

pub const REPORT_HEADER: &str = "Translation validation issues:";
pub const SUCCESS_MESSAGE: &str = "All translations validated successfully!";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Drop repeated malformed tokens within one key/locale, keeping the first.
    pub dedupe_syntax_tokens: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            dedupe_syntax_tokens: true,
        }
    }
}

#[derive(Default)]
struct LocaleGroup<'a> {
    count: Option<(usize, usize)>,
    types: Vec<(usize, &'a str, &'a str)>,
    syntax: Vec<&'a str>,
}

impl<'a> LocaleGroup<'a> {
    fn add(&mut self, issue: &'a ValidationIssue, dedupe_syntax: bool) {
        match issue {
            ValidationIssue::CountMismatch { expected, actual } => {
                self.count.get_or_insert((*expected, *actual));
            }
            ValidationIssue::TypeMismatch {
                position,
                expected,
                actual,
            } => {
                let entry = (*position, expected.as_str(), actual.as_str());
                if !self.types.contains(&entry) {
                    self.types.push(entry);
                }
            }
            ValidationIssue::SyntaxError { tokens } => {
                for token in tokens {
                    if dedupe_syntax && self.syntax.contains(&token.as_str()) {
                        continue;
                    }
                    self.syntax.push(token.as_str());
                }
            }
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some((expected, actual)) = self.count {
            lines.push(format!(
                "count mismatch. Expected {expected} placeholders, found {actual}."
            ));
        }
        for (position, expected, actual) in &self.types {
            lines.push(format!(
                "type mismatch at position {position}. Expected {expected}, found {actual}."
            ));
        }
        if !self.syntax.is_empty() {
            lines.push(format!(
                "syntax issues with placeholders: {}",
                self.syntax.join(", ")
            ));
        }
        lines
    }
}

/// Build the report with default options.
pub fn build_report(records: &[ValidationRecord], payload: Option<&str>) -> String {
    build_report_with(records, payload, &ReportOptions::default())
}

/// Group records by key, then by locale, both in first-seen order.
pub fn build_report_with(
    records: &[ValidationRecord],
    payload: Option<&str>,
    options: &ReportOptions,
) -> String {
    if records.is_empty() {
        return SUCCESS_MESSAGE.to_string();
    }

    let mut grouped: IndexMap<&str, IndexMap<&LocaleId, LocaleGroup<'_>>> = IndexMap::new();
    for r in records {
        grouped
            .entry(r.key.as_str())
            .or_default()
            .entry(&r.locale)
            .or_default()
            .add(&r.issue, options.dedupe_syntax_tokens);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_HEADER}");
    let _ = writeln!(out);
    for (key, locales) in &grouped {
        let _ = writeln!(out, "Key `{key}` issues:");
        for (locale, group) in locales {
            let _ = writeln!(out, "    Locale `{locale}`:");
            for line in group.lines() {
                let _ = writeln!(out, "        - {line}");
            }
        }
        let _ = writeln!(out);
    }

    if let Some(extra) = payload.filter(|p| !p.is_empty()) {
        out.push_str(extra);
        if !extra.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

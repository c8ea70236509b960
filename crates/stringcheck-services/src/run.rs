use crate::load::{load_bundles, ResourceStore, StringsParser};
use std::io::Write;
use stringcheck_core::{Result, ValidationRecord};
use stringcheck_report::{build_report_with, publish, Notifier, ReportOptions};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Free text appended to the report (build metadata, PR link, ...).
    pub payload: Option<String>,
    pub report: ReportOptions,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<ValidationRecord>,
    pub report: String,
    /// Whether the report went to the notifier.
    pub sent: bool,
}

/// Load every bundle and compare it against the reference locale.
pub fn collect_records(
    store: &dyn ResourceStore,
    parser: &dyn StringsParser,
) -> Result<Vec<ValidationRecord>> {
    let bundles = load_bundles(store, parser)?;
    let records = stringcheck_validate::validate(&bundles)?;
    tracing::info!(event = "validation_done", locales = bundles.len(), issues = records.len());
    Ok(records)
}

/// Build the text report, print it to `out` and forward it when asked to.
pub fn report_and_publish(
    records: Vec<ValidationRecord>,
    options: &RunOptions,
    notifier: Option<&dyn Notifier>,
    out: &mut impl Write,
) -> Result<RunOutcome> {
    let report = build_report_with(&records, options.payload.as_deref(), &options.report);
    let sent = publish(out, &report, !records.is_empty(), notifier)?;
    Ok(RunOutcome {
        records,
        report,
        sent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::XmlStringsParser;
    use crate::testing::MemStore;
    use std::cell::RefCell;
    use stringcheck_core::StringCheckError;
    use stringcheck_report::SUCCESS_MESSAGE;

    #[derive(Default)]
    struct Recording(RefCell<Vec<String>>);

    impl Notifier for Recording {
        fn send(&self, message: &str) -> Result<()> {
            self.0.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    fn xml(pairs: &[(&str, &str)]) -> String {
        let body: String = pairs
            .iter()
            .map(|(k, v)| format!(r#"<string name="{k}">{v}</string>"#))
            .collect();
        format!("<resources>{body}</resources>")
    }

    #[test]
    fn count_mismatch_is_reported_and_sent() -> Result<()> {
        let en = xml(&[("hello", "Hello %1$s, you have %2$d items")]);
        let fr = xml(&[("hello", "Bonjour %1$s")]);
        let store = MemStore::new(&[
            ("values/strings.xml", en.as_str()),
            ("values-fr/strings.xml", fr.as_str()),
        ]);

        let records = collect_records(&store, &XmlStringsParser)?;
        let notifier = Recording::default();
        let mut out = Vec::new();
        let options = RunOptions {
            payload: Some("PR: Validation plugin\nAuthor: AMayst".into()),
            ..RunOptions::default()
        };
        let outcome = report_and_publish(records, &options, Some(&notifier), &mut out)?;

        assert!(outcome.sent);
        let expected = "Translation validation issues:\n\nKey `hello` issues:\n    Locale `fr`:\n        - count mismatch. Expected 2 placeholders, found 1.\n\nPR: Validation plugin\nAuthor: AMayst\n";
        assert_eq!(notifier.0.borrow().as_slice(), [expected]);
        assert_eq!(String::from_utf8(out)?, expected);
        Ok(())
    }

    #[test]
    fn valid_translations_print_success_and_send_nothing() -> Result<()> {
        let en = xml(&[("hello", "Hello %1$s and %2$d")]);
        let ar = xml(&[("hello", "%2$d و %1$s")]);
        let store = MemStore::new(&[
            ("values/strings.xml", en.as_str()),
            ("values-ar/strings.xml", ar.as_str()),
        ]);

        let records = collect_records(&store, &XmlStringsParser)?;
        assert!(records.is_empty());
        let notifier = Recording::default();
        let mut out = Vec::new();
        let outcome =
            report_and_publish(records, &RunOptions::default(), Some(&notifier), &mut out)?;
        assert!(!outcome.sent);
        assert_eq!(outcome.report, SUCCESS_MESSAGE);
        assert!(notifier.0.borrow().is_empty());
        assert_eq!(String::from_utf8(out)?, format!("{SUCCESS_MESSAGE}\n"));
        Ok(())
    }

    #[test]
    fn missing_reference_aborts_before_reporting() {
        let fr = xml(&[("hello", "Bonjour")]);
        let store = MemStore::new(&[("values-fr/strings.xml", fr.as_str())]);
        let err = collect_records(&store, &XmlStringsParser).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StringCheckError>(),
            Some(StringCheckError::MissingReferenceLocale(_))
        ));
    }

    #[test]
    fn syntax_issues_are_reported_for_reference_too() -> Result<()> {
        let en = xml(&[("error1", "Value %3s")]);
        let fr = xml(&[("error1", "Valeur %3s")]);
        let store = MemStore::new(&[
            ("values/strings.xml", en.as_str()),
            ("values-fr/strings.xml", fr.as_str()),
        ]);
        let records = collect_records(&store, &XmlStringsParser)?;
        let locales: Vec<_> = records.iter().map(|r| r.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "fr"]);

        let mut out = Vec::new();
        let outcome = report_and_publish(records, &RunOptions::default(), None, &mut out)?;
        assert!(!outcome.sent);
        assert!(outcome.report.contains(
            "    Locale `en`:\n        - syntax issues with placeholders: %3s\n    Locale `fr`:"
        ));
        Ok(())
    }
}

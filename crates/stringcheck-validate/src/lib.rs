//! Placeholder validation across translation sets.
//!
//! The reference bundle (`en`) is the source of truth: every other locale's
//! text for the same key must carry the same placeholders in the same
//! canonical order. Syntax checks run on every locale, reference included.

use stringcheck_core::{
    Bundles, LocaleId, ResourceBundle, Result, StringCheckError, ValidationIssue,
    ValidationRecord,
};

pub mod placeholders;
pub mod syntax;

pub use placeholders::extract_placeholders;
pub use syntax::find_malformed;

/// Compare every locale against the reference locale.
///
/// Records come out with the reference locale first, then the other locales
/// in lexicographic order; keys follow each bundle's document order. The
/// iteration order of `bundles` has no effect on the result.
pub fn validate(bundles: &Bundles) -> Result<Vec<ValidationRecord>> {
    let reference_id = LocaleId::reference();
    let reference = bundles
        .get(&reference_id)
        .ok_or_else(|| StringCheckError::MissingReferenceLocale(reference_id.clone()))?;

    let mut locales: Vec<&LocaleId> = bundles.keys().collect();
    locales.sort_by(|a, b| b.is_reference().cmp(&a.is_reference()).then_with(|| a.cmp(b)));

    let mut records = Vec::new();
    for locale in locales {
        let before = records.len();
        validate_locale(reference, locale, &bundles[locale], &mut records);
        tracing::debug!(
            event = "locale_validated",
            locale = %locale,
            keys = bundles[locale].len(),
            issues = records.len() - before
        );
    }
    Ok(records)
}

fn validate_locale(
    reference: &ResourceBundle,
    locale: &LocaleId,
    bundle: &ResourceBundle,
    out: &mut Vec<ValidationRecord>,
) {
    for (key, localized) in bundle {
        // keys unknown to the reference are not ours to judge
        let Some(reference_text) = reference.get(key) else {
            continue;
        };
        for issue in compare_text(reference_text, localized) {
            out.push(ValidationRecord::new(key.as_str(), locale.clone(), issue));
        }
    }
}

/// Issues found in `localized` relative to `reference`, count first, then
/// type mismatches by index, then syntax.
pub fn compare_text(reference: &str, localized: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let expected = extract_placeholders(reference);
    let actual = extract_placeholders(localized);

    if expected.len() != actual.len() {
        issues.push(ValidationIssue::CountMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    for (position, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
        if exp.raw != act.raw {
            issues.push(ValidationIssue::TypeMismatch {
                position,
                expected: exp.raw.clone(),
                actual: act.raw.clone(),
            });
        }
    }

    let malformed = find_malformed(localized);
    if !malformed.is_empty() {
        issues.push(ValidationIssue::SyntaxError { tokens: malformed });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(pairs: &[(&str, &str)]) -> ResourceBundle {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bundles(sets: &[(&str, &[(&str, &str)])]) -> Bundles {
        sets.iter()
            .map(|(locale, pairs)| (LocaleId::from(*locale), bundle(pairs)))
            .collect()
    }

    fn issues_for<'a>(
        records: &'a [ValidationRecord],
        key: &str,
        locale: &str,
    ) -> Vec<&'a ValidationIssue> {
        records
            .iter()
            .filter(|r| r.key == key && r.locale.as_str() == locale)
            .map(|r| &r.issue)
            .collect()
    }

    #[test]
    fn count_mismatch_without_type_mismatch() {
        let b = bundles(&[
            ("en", &[("hello", "Hello %1$s, you have %2$d items")]),
            ("fr", &[("hello", "Bonjour %1$s")]),
        ]);
        let records = validate(&b).unwrap();
        assert_eq!(
            issues_for(&records, "hello", "fr"),
            vec![&ValidationIssue::CountMismatch {
                expected: 2,
                actual: 1
            }]
        );
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn type_mismatch_without_count_mismatch() {
        let b = bundles(&[("en", &[("hello", "%1$s")]), ("fr", &[("hello", "%1$d")])]);
        let records = validate(&b).unwrap();
        assert_eq!(
            records,
            vec![ValidationRecord::new(
                "hello",
                LocaleId::from("fr"),
                ValidationIssue::TypeMismatch {
                    position: 0,
                    expected: "%1$s".into(),
                    actual: "%1$d".into(),
                }
            )]
        );
    }

    #[test]
    fn reordered_placeholders_are_fine() {
        let b = bundles(&[
            ("en", &[("hello", "%1$s and %2$d")]),
            ("ar", &[("hello", "%2$d and %1$s")]),
        ]);
        assert!(validate(&b).unwrap().is_empty());
    }

    #[test]
    fn syntax_errors_reported_once_per_key_and_locale() {
        let b = bundles(&[
            ("en", &[("broken", "Value %1s")]),
            ("fr", &[("broken", "Valeur %1s et % s")]),
        ]);
        let records = validate(&b).unwrap();
        assert_eq!(
            issues_for(&records, "broken", "en"),
            vec![&ValidationIssue::SyntaxError {
                tokens: vec!["%1s".into()]
            }]
        );
        assert_eq!(
            issues_for(&records, "broken", "fr"),
            vec![&ValidationIssue::SyntaxError {
                tokens: vec!["%1s".into(), "% s".into()]
            }]
        );
    }

    #[test]
    fn keys_missing_from_reference_are_skipped() {
        let b = bundles(&[
            ("en", &[("hello", "Hello")]),
            ("fr", &[("extra", "%1$ s broken"), ("hello", "Bonjour")]),
        ]);
        assert!(validate(&b).unwrap().is_empty());
    }

    #[test]
    fn missing_reference_is_fatal() {
        let b = bundles(&[("fr", &[("hello", "Bonjour")])]);
        let err = validate(&b).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StringCheckError>(),
            Some(StringCheckError::MissingReferenceLocale(id)) if id.as_str() == "en"
        ));
    }

    #[test]
    fn result_does_not_depend_on_bundle_order() {
        let de: &[(&str, &str)] = &[("a", "%d"), ("b", "%1$s")];
        let en: &[(&str, &str)] = &[("a", "%s"), ("b", "%1$s %2$s")];
        let fr: &[(&str, &str)] = &[("b", "%2$s"), ("a", "%1s")];
        let one = validate(&bundles(&[("fr", fr), ("en", en), ("de", de)])).unwrap();
        let two = validate(&bundles(&[("de", de), ("fr", fr), ("en", en)])).unwrap();
        assert_eq!(one, two);
        assert_eq!(one[0].locale.as_str(), "de");
    }

    #[test]
    fn extra_localized_placeholders_only_count() {
        let issues = compare_text("%1$s", "%1$s %2$s");
        assert_eq!(
            issues,
            vec![ValidationIssue::CountMismatch {
                expected: 1,
                actual: 2
            }]
        );
    }
}

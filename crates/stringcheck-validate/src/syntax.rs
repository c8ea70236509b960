use regex::Regex;
use std::sync::OnceLock;

struct Rule {
    name: &'static str,
    re: Regex,
    /// Skip matches directly after `%` or a digit (those belong to other rules).
    bare: bool,
}

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            ("missing-dollar", r"%\d+[a-zA-Z]"),
            ("space-after-dollar", r"%\d+\$\s+[a-zA-Z]"),
            ("digits-after-dollar", r"%\d+\$\d+"),
            ("dollar-after-conversion", r"%[a-zA-Z]\$"),
            ("space-after-percent", r"%\s+[a-zA-Z]"),
            ("space-before-dollar", r"%\d+\s+\$[a-zA-Z]"),
            ("dollar-without-ordinal", r"%\$[a-zA-Z]"),
            ("bare-dollar", r"\$[a-zA-Z]"),
        ]
        .into_iter()
        .map(|(name, pat)| Rule {
            name,
            re: Regex::new(pat).unwrap(),
            bare: name == "bare-dollar",
        })
        .collect()
    })
}

/// Clock/date-like `%10s`, `%1030d`: digits in pairs, then `s` or `d`.
fn is_excluded(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^%(?:\d{2})+[sd]$").unwrap())
        .is_match(token)
}

fn follows_percent_or_digit(text: &str, start: usize) -> bool {
    start > 0 && matches!(text.as_bytes()[start - 1], b'%' | b'0'..=b'9')
}

/// Find substrings that look like broken placeholders.
///
/// Results follow rule order, then match order within a rule. Nothing is
/// deduplicated here.
pub fn find_malformed(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for rule in rules() {
        for m in rule.re.find_iter(text) {
            if rule.bare && follows_percent_or_digit(text, m.start()) {
                continue;
            }
            let token = m.as_str();
            if is_excluded(token) {
                tracing::trace!(event = "syntax_excluded", rule = rule.name, token = token);
                continue;
            }
            out.push(token.to_string());
        }
    }
    out
}

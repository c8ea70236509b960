use regex::Regex;
use std::sync::OnceLock;
use stringcheck_core::PlaceholderToken;

/// Extract `%1$s` / `%d` style placeholders in canonical order.
///
/// Tokens are sorted by their explicit ordinal; unpositioned tokens go last
/// and keep the order they appear in. This makes `%2$d ... %1$s` compare equal
/// to `%1$s ... %2$d` when two locales reorder the arguments.
pub fn extract_placeholders(text: &str) -> Vec<PlaceholderToken> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"%(?:(\d+)\$)?([a-zA-Z])").unwrap());

    let mut tokens: Vec<PlaceholderToken> = re
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str().to_string();
            let conversion = caps.get(2)?.as_str().chars().next()?;
            let position = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            Some(PlaceholderToken {
                position,
                conversion,
                raw,
            })
        })
        .collect();

    // sort_by_key is stable
    tokens.sort_by_key(|t| t.position.map(u64::from).unwrap_or(u64::MAX));
    tokens
}

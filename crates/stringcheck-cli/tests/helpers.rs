use std::fs;
use std::path::Path;

/// Substring check that prints the start of the haystack on failure.
pub fn assert_contains_with_context(haystack: &str, needle: &str, context_msg: &str) {
    if haystack.contains(needle) {
        return;
    }
    let head = haystack.lines().take(10).collect::<Vec<_>>().join("\n");
    panic!(
        "{}\n--- needle ---\n{}\n--- head(10) ---\n{}",
        context_msg, needle, head
    );
}

pub fn assert_no_ansi(s: &str, context_msg: &str) {
    assert!(
        !s.bytes().any(|b| b == 0x1B),
        "{}\nANSI escapes detected:\n{}",
        context_msg,
        s
    );
}

/// Write `<root>/<folder>/strings.xml` with one `<string>` per entry.
pub fn write_strings(root: &Path, folder: &str, entries: &[(&str, &str)]) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for (name, text) in entries {
        xml.push_str(&format!("    <string name=\"{name}\">{text}</string>\n"));
    }
    xml.push_str("</resources>\n");
    fs::write(dir.join("strings.xml"), xml).unwrap();
}

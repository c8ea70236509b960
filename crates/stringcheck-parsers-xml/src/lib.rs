use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::{Path, PathBuf};
use stringcheck_core::{ResourceBundle, Result, StringCheckError};
use walkdir::WalkDir;

/// File name every resource set is stored under.
pub const STRINGS_FILE_NAME: &str = "strings.xml";

/// Recursively find every `strings.xml` under `root`, sorted by path.
///
/// A missing root, or a root that is a file, yields an empty list.
pub fn discover_strings_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::warn!(event = "resources_root_missing", root = %root.display());
        return Vec::new();
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == STRINGS_FILE_NAME)
        .map(|e| e.into_path())
        .collect()
}

fn name_attr(e: &BytesStart<'_>) -> Result<Option<String>> {
    match e.try_get_attribute("name") {
        Ok(Some(attr)) => {
            let value = attr
                .unescape_value()
                .map_err(|err| StringCheckError::Xml(format!("{err}")))?;
            Ok(Some(value.into_owned()))
        }
        Ok(None) => Ok(None),
        Err(err) => Err(StringCheckError::Xml(format!("{err}")).into()),
    }
}

/// Parse `<string name="...">` elements into a key -> text map.
///
/// Text of nested markup (`<b>`, `<xliff:g>`) is kept, tags are dropped.
/// Structurally broken documents are an error; a document without string
/// elements is not.
pub fn parse_strings_xml(xml: &str) -> Result<ResourceBundle> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut out = ResourceBundle::new();
    let mut buf = Vec::new();
    let mut tag_stack: Vec<String> = Vec::new();
    // (name, depth of the <string> element, accumulated text)
    let mut current: Option<(String, usize, String)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                tag_stack.push(tag);
                if current.is_none() && e.name().as_ref() == b"string" {
                    if let Some(name) = name_attr(&e)? {
                        current = Some((name, tag_stack.len(), String::new()));
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if current.is_none() && e.name().as_ref() == b"string" {
                    if let Some(name) = name_attr(&e)? {
                        out.insert(name, String::new());
                    }
                }
            }
            Ok(Event::End(_)) => {
                let closes_string =
                    matches!(&current, Some((_, depth, _)) if *depth == tag_stack.len());
                if closes_string {
                    if let Some((name, _, text)) = current.take() {
                        out.insert(name, text);
                    }
                }
                tag_stack.pop();
            }
            Ok(Event::Text(t)) => {
                if let Some((_, _, text)) = current.as_mut() {
                    let value = t
                        .unescape()
                        .map_err(|err| StringCheckError::Xml(format!("{err}")))?;
                    text.push_str(&value);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some((_, _, text)) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(StringCheckError::Xml(format!("{e}")).into()),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = tag_stack.last() {
        return Err(StringCheckError::Xml(format!(
            "unexpected end of document, element `{open}` is not closed"
        ))
        .into());
    }

    Ok(out)
}

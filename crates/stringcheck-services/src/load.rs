use crate::locale::locale_for_path;
use color_eyre::eyre::WrapErr;
use std::path::{Path, PathBuf};
use stringcheck_core::{Bundles, LocaleId, ResourceBundle, Result};

/// Where resource files come from.
pub trait ResourceStore {
    /// Every `strings.xml` to load, in a stable order.
    fn files(&self) -> Vec<PathBuf>;
    fn read(&self, path: &Path) -> Result<String>;
}

/// Turns resource file content into a bundle.
pub trait StringsParser {
    fn parse(&self, content: &str) -> Result<ResourceBundle>;
}

/// Resource files under a directory on disk.
#[derive(Debug, Clone)]
pub struct FsResourceStore {
    root: PathBuf,
}

impl FsResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceStore for FsResourceStore {
    fn files(&self) -> Vec<PathBuf> {
        stringcheck_parsers_xml::discover_strings_files(&self.root)
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlStringsParser;

impl StringsParser for XmlStringsParser {
    fn parse(&self, content: &str) -> Result<ResourceBundle> {
        stringcheck_parsers_xml::parse_strings_xml(content)
    }
}

/// One resource file as seen by `scan`.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub locale: LocaleId,
    pub keys: usize,
}

fn load_file(
    store: &dyn ResourceStore,
    parser: &dyn StringsParser,
    path: &Path,
) -> Result<ResourceBundle> {
    let content = store
        .read(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parser
        .parse(&content)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))
}

/// Parse every file and report its locale and size, without merging.
pub fn scan_files(
    store: &dyn ResourceStore,
    parser: &dyn StringsParser,
) -> Result<Vec<ScanEntry>> {
    store
        .files()
        .into_iter()
        .map(|path| {
            let bundle = load_file(store, parser, &path)?;
            Ok(ScanEntry {
                locale: locale_for_path(&path),
                keys: bundle.len(),
                path,
            })
        })
        .collect()
}

/// Load all resource files into per-locale bundles.
///
/// Files sharing a locale (several modules, say) are merged; a key defined
/// twice keeps the value from the later file. The first parse error aborts
/// the whole load.
pub fn load_bundles(store: &dyn ResourceStore, parser: &dyn StringsParser) -> Result<Bundles> {
    let mut bundles = Bundles::new();
    for path in store.files() {
        let locale = locale_for_path(&path);
        let parsed = load_file(store, parser, &path)?;
        tracing::debug!(event = "bundle_loaded", path = %path.display(), locale = %locale, keys = parsed.len());
        let bundle = bundles.entry(locale.clone()).or_default();
        for (key, text) in parsed {
            if let Some(previous) = bundle.insert(key.clone(), text) {
                tracing::debug!(event = "key_overridden", locale = %locale, key = %key, previous = %previous);
            }
        }
    }
    tracing::info!(event = "bundles_loaded", locales = bundles.len());
    Ok(bundles)
}

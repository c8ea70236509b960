use crate::load::ResourceStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use stringcheck_core::{Result, StringCheckError};

/// In-memory store: path -> content.
pub(crate) struct MemStore(BTreeMap<PathBuf, String>);

impl MemStore {
    pub(crate) fn new(files: &[(&str, &str)]) -> Self {
        Self(
            files
                .iter()
                .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                .collect(),
        )
    }
}

impl ResourceStore for MemStore {
    fn files(&self) -> Vec<PathBuf> {
        self.0.keys().cloned().collect()
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.0.get(path).cloned().ok_or_else(|| {
            StringCheckError::Other(format!("no such file {}", path.display())).into()
        })
    }
}

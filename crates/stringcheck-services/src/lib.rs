//! High-level orchestration layer over lower-level crates.
//! Intentionally thin: exposes the functions the CLI drives.

pub mod load;
pub mod locale;
pub mod run;

#[cfg(test)]
mod testing;

pub use load::{
    load_bundles, scan_files, FsResourceStore, ResourceStore, ScanEntry, StringsParser,
    XmlStringsParser,
};
pub use locale::locale_for_path;
pub use run::{collect_records, report_and_publish, RunOptions, RunOutcome};
pub use stringcheck_core::{Result, ValidationRecord};

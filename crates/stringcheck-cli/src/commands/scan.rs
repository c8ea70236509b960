use std::path::PathBuf;
use stringcheck_domain::{ScanBundle, SCHEMA_VERSION};
use stringcheck_services::{scan_files, FsResourceStore, XmlStringsParser};

pub fn run_scan(root: Option<PathBuf>, format: String) -> color_eyre::Result<()> {
    tracing::debug!(event = "scan_args", root = ?root, format = %format);

    let cfg = stringcheck_config::load_config().unwrap_or_default();
    let root = super::resolve_root(root, &cfg)?;
    let entries = scan_files(&FsResourceStore::new(&root), &XmlStringsParser)?;

    match format.as_str() {
        "json" => {
            let items: Vec<ScanBundle> = entries
                .iter()
                .map(|e| ScanBundle {
                    schema_version: SCHEMA_VERSION,
                    path: e.path.display().to_string(),
                    locale: e.locale.to_string(),
                    keys: e.keys,
                })
                .collect();
            serde_json::to_writer(std::io::stdout().lock(), &items)?;
            println!();
        }
        _ => {
            let use_color = crate::ui::use_color();
            for e in &entries {
                if use_color {
                    use owo_colors::OwoColorize;
                    println!(
                        "{:<8} {:>5}  {}",
                        e.locale.green(),
                        e.keys.magenta(),
                        e.path.display().blue()
                    );
                } else {
                    println!("{:<8} {:>5}  {}", e.locale, e.keys, e.path.display());
                }
            }
            if !entries.iter().any(|e| e.locale.is_reference()) {
                crate::ui_warn!("no reference (en) strings.xml under {}", root.display());
            }
            crate::ui_info!("{} file(s) found", entries.len());
        }
    }
    Ok(())
}

pub mod scan;
pub mod schema;
pub mod validate;

use std::path::PathBuf;

/// CLI `--root`, else `resources_path` from stringcheck.toml.
pub(crate) fn resolve_root(
    root: Option<PathBuf>,
    cfg: &stringcheck_config::StringCheckConfig,
) -> color_eyre::Result<PathBuf> {
    root.or_else(|| cfg.resources_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "no resource root given: pass --root or set resources_path in stringcheck.toml"
            )
        })
}

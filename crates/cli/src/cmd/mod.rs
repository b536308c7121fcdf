pub mod check_file;
pub mod doctor;
pub mod output;
pub mod validate;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docmeta_core::config::{ConfigLoader, ResolvedConfig};

const DEFAULT_DOCS_ROOT: &str = "docs";

/// Resolve configuration, letting an explicit `root` override the profile's docs root.
pub(crate) fn resolve_config(
    config: Option<&Path>,
    profile: Option<&str>,
    root: Option<&Path>,
) -> Result<ResolvedConfig> {
    let fallback = root.unwrap_or_else(|| Path::new(DEFAULT_DOCS_ROOT));
    let mut rc = ConfigLoader::load_or_default(config, profile, fallback)
        .wrap_err("failed to load configuration")?;
    if let Some(root) = root {
        rc.docs_root = root.to_path_buf();
    }
    Ok(rc)
}

/// Forward-slash path string, the form used for category inference.
pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

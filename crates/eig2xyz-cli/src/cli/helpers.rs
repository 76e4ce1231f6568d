use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The output path replaces the input's final extension with `.xyz`; an
/// extensionless input gains the extension.
pub(super) fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("xyz")
}

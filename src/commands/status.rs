//! Status command - show an overview of the registry

use ncc_quiz::Registry;
use ncc_quiz::config::Config;
use ncc_quiz::output::{OutputMode, StatusResult};
use ncc_quiz::storage::RegistryStore;

/// Show registry counts for the configured data file
pub fn status(config: &Config, output_mode: OutputMode) -> anyhow::Result<()> {
    let store = config.file_store();
    let source = store.describe();
    let registry = Registry::open(store)?;

    StatusResult {
        source,
        stats: registry.stats(),
    }
    .render(output_mode);
    Ok(())
}

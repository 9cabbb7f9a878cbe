//! Serve command - run the HTTP API

use ncc_quiz::config::Config;

/// Start the HTTP API server
#[cfg(feature = "server")]
pub fn serve(config: &Config) -> anyhow::Result<()> {
    use std::sync::Arc;

    use ncc_quiz::Registry;

    let store = config.file_store();
    let data_file = store.path().to_path_buf();
    let registry = Arc::new(Registry::open(store)?);
    let addr = config.addr();

    println!("Starting ncc-quiz...");
    println!("API at http://{addr}/api");
    println!("Data file: {}", data_file.display());
    println!();
    println!("Press Ctrl+C to stop");

    ncc_quiz::server::serve(registry, &addr, config.server.workers)
}

/// Start the HTTP API server
#[cfg(not(feature = "server"))]
pub fn serve(_config: &Config) -> anyhow::Result<()> {
    anyhow::bail!("ncc-quiz was built without the `server` feature")
}

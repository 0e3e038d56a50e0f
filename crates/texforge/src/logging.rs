use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber; `RUST_LOG` overrides the verbosity flag
///
/// Returns false, after a warning on stderr, when a global subscriber is
/// already installed.
pub fn init(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging not initialized: {e}");
            false
        }
    }
}

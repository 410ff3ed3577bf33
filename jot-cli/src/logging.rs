use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` wins unless `--verbose` is given;
/// otherwise only warnings are shown.
pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

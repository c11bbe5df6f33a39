//! `discover-tests` entry point

fn main() {
    // Structured logging to stderr so `--stdout` output stays clean; defaults to info
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    linuxmain_gen::cli::run();
}

use env_logger::Env;

/// Diagnostics go through `log`; `RUST_LOG` raises the level when needed.
/// Per-file failures are already printed by `ui`, so they log at `debug`.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}

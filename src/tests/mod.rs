use tracing_subscriber::EnvFilter;

mod basic;
mod collision;
mod traits;

/// Routes `tracing` output through the test harness; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

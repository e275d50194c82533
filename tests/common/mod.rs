use tracing_subscriber::EnvFilter;

/// RUST_LOG=reqmock=trace cargo test 可以看到写穿和路由日志
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Property and scenario tests against the public API of `ordered_bst`.
//!
//! Set `RUST_LOG=ordered_bst=debug` to see the tree's structural log lines while these run.

mod tree;

/// Installs `env_logger` once per test binary. Later calls are no-ops.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//! Verification scripts for the QuantumShards Auth web application.
//!
//! Each binary in `src/bin/` drives a headless Chromium (through the
//! `playwright-rs` client) against an already-running instance of the app
//! at `http://localhost:8080`: navigate, wait for a fixed condition, check
//! page content or metadata, and capture a screenshot for manual
//! inspection. Checks are reported as PASSED/FAILED lines on stdout; a
//! failed check is a result, not an error, and never fails the run.
//!
//! The binaries share this small library:
//!
//! - [`session`]: browser lifecycle, closed exactly once on every path
//! - [`flows`]: the script bodies, parameterized by URL and output paths
//!   so tests can point them at a fixture server
//! - [`report`]: check recording and the exact stdout lines
//! - [`target`]: the hardcoded URLs, selectors, and expected strings
//!
//! The target server must already be running; these scripts do not start
//! it. Browser installation follows the `playwright-rs` instructions
//! (`npx playwright install chromium`).

pub mod error;
pub mod flows;
pub mod report;
pub mod session;
pub mod target;

pub use error::{Error, Result};
pub use report::Report;
pub use session::Session;

/// Initializes stdout tracing for a script run.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

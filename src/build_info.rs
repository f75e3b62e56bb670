//! Build-time information
//!
//! Metadata captured by `build.rs` through vergen.

use tracing::info;

/// Crate version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Git commit, when built from a checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Short version string: `{version}+{target}-opt{level}`
pub fn version_string() -> String {
    format!("{}+{}-opt{}", PKG_VERSION, CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}

/// Logs build metadata at startup
pub fn log_build_info() {
    info!(
        version = PKG_VERSION,
        target = CARGO_TARGET_TRIPLE,
        opt_level = CARGO_OPT_LEVEL,
        rustc = RUSTC_SEMVER,
        built = BUILD_TIMESTAMP,
        git_sha = GIT_SHA.unwrap_or("unknown"),
        "Build info"
    );
}

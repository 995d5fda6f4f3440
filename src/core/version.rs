//! Build metadata shared across the CLI.
//! The generated version.rs from the build script is included here so there
//! is a single source of truth for build information.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Descriptor file name used when neither the CLI nor the config names one
pub fn default_descriptor() -> &'static str {
    DEFAULT_DESCRIPTOR
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Version string shown by `--version`, including git hash and build time
pub fn long_version() -> &'static str {
    LONG_VERSION
}

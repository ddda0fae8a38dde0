use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthGuide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the optional user-supplied catalog.
pub const CATALOG_OVERRIDE_FILE: &str = "catalog.json";

/// Lower bound of the "analyzing" pause shown before results (ms).
pub const ANALYSIS_DELAY_MIN_MS: u64 = 2000;
/// Upper bound (exclusive) of the "analyzing" pause (ms).
pub const ANALYSIS_DELAY_MAX_MS: u64 = 3000;

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "healthguide_lib=info,warn"
}

/// Get the application data directory
/// ~/HealthGuide/ on all platforms. `None` when no home directory exists.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Location of the optional catalog override.
pub fn catalog_override_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(CATALOG_OVERRIDE_FILE))
}

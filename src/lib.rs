pub mod analysis;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod matcher;
pub mod models;
pub mod selection;

use tracing_subscriber::EnvFilter;

pub use catalog::{Catalog, CatalogError};
pub use matcher::{match_conditions, ConditionMatch, Query};

/// Install the fmt subscriber. `RUST_LOG` wins over the default filter.
///
/// Returns `false` when a global subscriber was already set; nothing is
/// installed or logged in that case.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
    installed
}

pub mod config;
pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use moviectl_core::MoviectlConfig;

/// Database URL from flag, then environment/config file.
pub(crate) fn resolve_database_url(flag: Option<String>, config: &MoviectlConfig) -> Result<String> {
    flag.or_else(|| config.database.url.clone()).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.moviectl/config.toml",
    )
}

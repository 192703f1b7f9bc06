pub mod config;
pub mod export;
pub mod ls;

use anyhow::Result;
use genie_config::Config;
use genie_sources::{HttpOptions, HttpTree, LocalTree, RemoteTree};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::SourceArgs;

/// Pick the tree to read from: local filesystem, or the HTTP API
pub fn build_tree(source: &SourceArgs, config: &Config) -> Result<Arc<dyn RemoteTree>> {
    if source.local {
        return Ok(Arc::new(LocalTree));
    }

    let api_url = source
        .api_url
        .clone()
        .unwrap_or_else(|| config.remote.api_url.clone());
    let options = HttpOptions {
        timeout: Duration::from_secs(config.remote.timeout_secs),
        user_agent: config.remote.user_agent.clone(),
    };

    Ok(Arc::new(HttpTree::new(api_url, options)?))
}

//! folio-rs: a small personal blog server
//!
//! Posts and comments live in an in-memory store that is seeded with sample
//! content at startup. Post bodies are Markdown, rendered to HTML by a
//! lightweight regex-based renderer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The main application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store shared with the server
    pub store: Arc<store::MemStorage>,
}

impl Folio {
    /// Create a new instance from a base directory and optional config path
    ///
    /// Without an explicit path, `_config.yml` in the base directory is used
    /// when present.
    pub fn new<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = Self::load_config(&base_dir, config_path)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Resolve and load the site configuration
    pub fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<config::SiteConfig> {
        match config_path {
            Some(path) => config::SiteConfig::load(path),
            None => config::SiteConfig::load_or_default(base_dir.join("_config.yml")),
        }
    }

    /// Create an instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let store = if config.sample_data {
            store::MemStorage::with_sample_data()
        } else {
            store::MemStorage::new()
        };

        Self {
            config,
            base_dir,
            store: Arc::new(store),
        }
    }

    /// Start the HTTP server
    pub async fn serve(&self) -> Result<()> {
        server::start(self).await
    }
}

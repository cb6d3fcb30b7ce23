//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Server
    pub ip: String,
    pub port: u16,
    /// Directory served for unmatched paths (css, images)
    pub static_dir: Option<String>,

    // Content
    /// Seed the store with the sample posts on startup
    pub sample_data: bool,

    // Date / Time format (chrono strftime)
    pub date_format: String,

    /// Reading speed used for the "min read" estimate
    pub words_per_minute: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            subtitle: String::new(),
            description: "Sharing thoughts, insights, and experiences on technology, design, and life."
                .to_string(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            ip: "localhost".to_string(),
            port: 5000,
            static_dir: None,

            sample_data: true,

            date_format: "%B %-d, %Y".to_string(),

            words_per_minute: 200,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Address string for binding, with "localhost" mapped to loopback
    pub fn bind_addr(&self) -> String {
        let ip = if self.ip == "localhost" {
            "127.0.0.1"
        } else {
            self.ip.as_str()
        };
        format!("{}:{}", ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.port, 5000);
        assert!(config.sample_data);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Field Notes
author: Test User
port: 8080
sample_data: false
comments_moderated: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Field Notes");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.port, 8080);
        assert!(!config.sample_data);
        assert_eq!(config.words_per_minute, 200);
        assert!(config.extra.contains_key("comments_moderated"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: From Disk\nip: 0.0.0.0\nport: 3000").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "From Disk");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.title, "My Blog");
    }
}

//! Service configuration.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP API binds to.
    pub bind_addr: String,
    /// Optional JSON file overriding the default pay rules.
    pub rules_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            rules_file: None,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("PAYROLL_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Ok(path) = std::env::var("PAYROLL_RULES_FILE") {
            if !path.is_empty() {
                config.rules_file = Some(PathBuf::from(path));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.rules_file.is_none());
    }
}

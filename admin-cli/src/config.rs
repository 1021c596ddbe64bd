//! CLI configuration from the environment
//!
//! `.env` is loaded first (see `main`), then:
//!
//! | Variable | Default |
//! |---|---|
//! | `ADMIN_API_URL` | `http://localhost:5000/api/v1` |
//! | `ADMIN_SESSION_DIR` | `$HOME/.shop-admin` (or `./.shop-admin`) |
//! | `ADMIN_TIMEOUT_SECS` | `30` |
//! | `ADMIN_LOG_DIR` | unset: log to stderr only |
//! | `RUST_LOG` | `info` |

use std::path::PathBuf;

use admin_client::ClientConfig;
use admin_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_url: String,
    pub session_dir: PathBuf,
    pub timeout_secs: u64,
    pub log_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("ADMIN_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            session_dir: std::env::var("ADMIN_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_dir()),
            timeout_secs: std::env::var("ADMIN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_dir: std::env::var("ADMIN_LOG_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs)
    }
}

fn default_session_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".shop-admin")
}

//! Mock server configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `MOCK_PORT` | `5000` | listen port |
//! | `MOCK_JWT_SECRET` | `mock-admin-secret` | HS256 signing secret |
//! | `RUST_LOG` | `admin_mock=info,tower_http=info` | log filter |

pub struct MockConfig {
    pub port: u16,
    pub jwt_secret: String,
}

impl MockConfig {
    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_SECRET: &'static str = "mock-admin-secret";

    pub fn from_env() -> Self {
        Self {
            port: std::env::var("MOCK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            jwt_secret: std::env::var("MOCK_JWT_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_SECRET.to_string()),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            jwt_secret: Self::DEFAULT_SECRET.to_string(),
        }
    }
}

use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | database file and logs directory |
/// | DATABASE_URL | sqlite:{WORK_DIR}/bistro.db | SQLite location |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | base log level (`RUST_LOG` overrides) |
/// | LOG_JSON | false | emit JSON log lines |
/// | DB_MAX_CONNECTIONS | 5 | connection pool size |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (408 on expiry) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown budget |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/bistro HTTP_PORT=8080 cargo run -p bistro-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database file and logs
    pub work_dir: String,
    pub database_url: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub db_max_connections: u32,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Shutdown timeout (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let work_dir = lookup("WORK_DIR").unwrap_or_else(|| "./data".into());
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| format!("sqlite:{}/bistro.db", work_dir.trim_end_matches('/')));

        Self {
            database_url,
            http_port: parse_var(&lookup, "HTTP_PORT").unwrap_or(3000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_var(&lookup, "LOG_JSON").unwrap_or(false),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(5),
            request_timeout_ms: parse_var(&lookup, "REQUEST_TIMEOUT_MS").unwrap_or(30000),
            shutdown_timeout_ms: parse_var(&lookup, "SHUTDOWN_TIMEOUT_MS").unwrap_or(10000),
            work_dir,
        }
    }

    /// Configuration for tests: nothing read from the environment
    pub fn for_tests() -> Self {
        Self::from_lookup(|_| None)
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

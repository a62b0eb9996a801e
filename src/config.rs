//! Application configuration loaded from environment variables.
//!
//! Paths and timeouts live here and are handed to the services that need
//! them, so nothing in the pipeline reads process-wide constants.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SOURCE_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Base URL of the users/posts source (no trailing slash)
    pub source_base_url: String,
    /// Upper bound on each outbound fetch
    pub request_timeout: Duration,
    /// Where the spreadsheet report is written
    pub spreadsheet_path: PathBuf,
    /// Where the PDF report is written
    pub document_path: PathBuf,
}

impl Config {
    /// Config for tests: local ports and paths, same timeout as production.
    pub fn test_default() -> Self {
        Self {
            port: 0,
            source_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            spreadsheet_path: PathBuf::from("report.xlsx"),
            document_path: PathBuf::from("report.pdf"),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let source_base_url = env::var("SOURCE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_SOURCE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if source_base_url.is_empty() {
            return Err(ConfigError::Invalid("SOURCE_BASE_URL"));
        }

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            source_base_url,
            request_timeout: Duration::from_millis(
                env::var("SOURCE_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
            spreadsheet_path: env::var("REPORT_XLSX_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./report.xlsx")),
            document_path: env::var("REPORT_PDF_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./report.pdf")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Path to the SQLite database file. The literal value `:memory:`
    /// opens a throwaway in-memory store.
    pub db_path: String,

    /// Site name shown in page titles and the masthead.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `INKPOT_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `INKPOT_DB_PATH`: SQLite database path (default: "inkpot.db")
    /// - `INKPOT_SITE_NAME`: Site name (default: "Inkpot")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("INKPOT_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let db_path = std::env::var("INKPOT_DB_PATH").unwrap_or_else(|_| "inkpot.db".to_string());

        let site_name = std::env::var("INKPOT_SITE_NAME").unwrap_or_else(|_| "Inkpot".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            db_path = %db_path,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            db_path,
            site_name,
        })
    }
}

use std::env;
use std::path::PathBuf;
use anyhow::{Result, Context};
use axum::http::HeaderValue;
use tracing::{info, warn};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://resume-analyzer-5bbd.vercel.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub max_file_size_mb: usize,
    pub retain_uploads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            upload_dir: PathBuf::from("uploads"),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            max_file_size_mb: 10,
            retain_uploads: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = Config::default();

        let config = Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| {
                info!("SERVER_HOST not set, using default: {}", defaults.server_host);
                defaults.server_host.clone()
            }),
            server_port: Self::parse_env_var("SERVER_PORT", defaults.server_port)
                .context("Failed to parse SERVER_PORT")?,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    info!("UPLOAD_DIR not set, using default: {}", defaults.upload_dir.display());
                    defaults.upload_dir.clone()
                }),
            allowed_origins: match env::var("ALLOWED_ORIGINS") {
                Ok(raw) => parse_origin_list(&raw),
                Err(_) => {
                    info!("ALLOWED_ORIGINS not set, using default: {}", DEFAULT_ALLOWED_ORIGIN);
                    defaults.allowed_origins.clone()
                }
            },
            max_file_size_mb: Self::parse_env_var("MAX_FILE_SIZE_MB", defaults.max_file_size_mb)
                .context("Failed to parse MAX_FILE_SIZE_MB")?,
            retain_uploads: Self::parse_env_var("RETAIN_UPLOADS", defaults.retain_uploads)
                .context("Failed to parse RETAIN_UPLOADS")?,
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }
        if self.allowed_origins.is_empty() {
            return Err(anyhow::anyhow!("ALLOWED_ORIGINS must name at least one origin"));
        }
        if self.allowed_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!("ALLOWED_ORIGINS must list explicit origins, not '*'"));
        }
        // A bad origin must fail startup rather than widen the allow-list.
        self.origin_header_values()?;
        Ok(())
    }

    /// Allowed origins as header values for the CORS layer.
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin '{}'", origin))
            })
            .collect()
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

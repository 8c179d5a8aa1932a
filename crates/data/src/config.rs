//! Shared configuration helpers and storage selection.
//!
//! Both services read their own `SITE_*` / `ADMIN_*` variables, but the
//! helpers below and the storage backend variables are common:
//!
//! - `STORAGE_BACKEND` - `fs` (default) or `hosted`
//! - `MEDIA_DIR` - Upload directory for `fs` (default: `media`)
//! - `MEDIA_PUBLIC_URL` - URL prefix the directory is served under (default: `/media`)
//! - `STORAGE_URL` - Hosted storage project URL (required for `hosted`)
//! - `STORAGE_SERVICE_KEY` - Hosted storage service key (required for `hosted`)
//! - `STORAGE_BUCKET` - Hosted storage bucket (default: `uploads`)

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Where uploaded images are stored.
#[derive(Clone)]
pub enum StorageConfig {
    /// Local directory, served by the services themselves.
    Filesystem { root: PathBuf, public_url: String },
    /// Hosted object storage.
    Hosted {
        url: Url,
        service_key: SecretString,
        bucket: String,
    },
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filesystem { root, public_url } => f
                .debug_struct("Filesystem")
                .field("root", root)
                .field("public_url", public_url)
                .finish(),
            Self::Hosted { url, bucket, .. } => f
                .debug_struct("Hosted")
                .field("url", &url.as_str())
                .field("service_key", &"[REDACTED]")
                .field("bucket", bucket)
                .finish(),
        }
    }
}

impl StorageConfig {
    /// Load storage settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the backend name is unknown or hosted storage
    /// is selected without a valid URL and service key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load storage settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`StorageConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "fs".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "fs" | "filesystem" | "local" => Ok(Self::Filesystem {
                root: PathBuf::from(lookup("MEDIA_DIR").unwrap_or_else(|| "media".to_string())),
                public_url: lookup("MEDIA_PUBLIC_URL").unwrap_or_else(|| "/media".to_string()),
            }),
            "hosted" => {
                let raw_url = lookup("STORAGE_URL")
                    .ok_or_else(|| ConfigError::MissingEnvVar("STORAGE_URL".to_string()))?;
                let url = Url::parse(&raw_url).map_err(|e| {
                    ConfigError::InvalidEnvVar("STORAGE_URL".to_string(), e.to_string())
                })?;
                let key = lookup("STORAGE_SERVICE_KEY").ok_or_else(|| {
                    ConfigError::MissingEnvVar("STORAGE_SERVICE_KEY".to_string())
                })?;
                validate_secret_strength(&key, "STORAGE_SERVICE_KEY")?;

                Ok(Self::Hosted {
                    url,
                    service_key: SecretString::from(key),
                    bucket: lookup("STORAGE_BUCKET").unwrap_or_else(|| "uploads".to_string()),
                })
            }
            other => Err(ConfigError::InvalidEnvVar(
                "STORAGE_BACKEND".to_string(),
                format!("unknown backend '{other}' (expected 'fs' or 'hosted')"),
            )),
        }
    }

    /// Local directory to serve at `/media`, if uploads live on disk.
    #[must_use]
    pub const fn local_root(&self) -> Option<&PathBuf> {
        match self {
            Self::Filesystem { root, .. } => Some(root),
            Self::Hosted { .. } => None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (used by Fly.io postgres attach).
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` naming `primary_key` if neither is set.
pub fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
#[must_use]
pub fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
#[must_use]
pub fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a bind address, defaulting when unset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if the value is not an IP address.
pub fn get_host(key: &str, default: &str) -> Result<IpAddr, ConfigError> {
    get_env_or_default(key, default)
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Read a listen port, defaulting when unset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if the value is not a valid port.
pub fn get_port(key: &str, default: &str) -> Result<u16, ConfigError> {
    get_env_or_default(key, default)
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
///
/// # Errors
///
/// Returns `ConfigError::InsecureSecret` describing the first failed check.
pub fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the key issued by your storage provider."
            ),
        ));
    }

    Ok(())
}

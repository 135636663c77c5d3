use rand::Rng;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Lifetime of a session token, in seconds (24 hours).
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Number of backup snapshots kept next to the document.
pub const MAX_BACKUPS: usize = 10;

/// Route names the document cannot be served under.
const RESERVED_NAMES: [&str; 3] = ["login", "logout", "save"];

#[derive(Clone)]
pub struct Config {
    // Auth
    pub password: Option<Zeroizing<String>>,
    pub secret: Zeroizing<String>,

    // Server
    pub bind_addr: SocketAddr,

    // Files
    pub static_dir: PathBuf,
    pub data_dir: PathBuf,
    pub data_file: String,
    pub editor_page: String,

    // Limits
    pub max_upload_bytes: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("secret", &"[REDACTED]")
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("data_dir", &self.data_dir)
            .field("data_file", &self.data_file)
            .field("editor_page", &self.editor_page)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        // An empty password disables authentication entirely
        let password = env::var("APP_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())
            .map(Zeroizing::new);

        let secret = match env::var("APP_SECRET") {
            Ok(secret) if !secret.is_empty() => Zeroizing::new(secret),
            _ => generate_secret(),
        };

        let port: u16 = parse_env_or_default("PORT", 8080)?;
        let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
        let data_dir = env::var("DATA_DIR")
            .ok()
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| static_dir.clone());

        let data_file = env::var("DATA_FILE").unwrap_or_else(|_| "ads_data.json".to_string());
        validate_file_name("DATA_FILE", &data_file)?;
        if RESERVED_NAMES.contains(&data_file.as_str()) {
            return Err(ConfigError::InvalidValue(
                "DATA_FILE".to_string(),
                format!("'{}' collides with a built-in route", data_file),
            ));
        }

        let editor_page =
            env::var("EDITOR_PAGE").unwrap_or_else(|_| "ads_editor.html".to_string());
        validate_file_name("EDITOR_PAGE", &editor_page)?;

        let max_upload_bytes = parse_env_or_default("MAX_UPLOAD_BYTES", 52_428_800)?;

        Ok(Config {
            password,
            secret,
            bind_addr,
            static_dir,
            data_dir,
            data_file,
            editor_page,
            max_upload_bytes,
        })
    }

    /// Whether a password is configured.
    pub fn auth_enabled(&self) -> bool {
        self.password.is_some()
    }

    /// Absolute URL path of the editor page.
    pub fn editor_path(&self) -> String {
        format!("/{}", self.editor_page)
    }

    /// Absolute URL path the document is served under.
    pub fn data_path(&self) -> String {
        format!("/{}", self.data_file)
    }
}

/// Random signing secret used when APP_SECRET is not supplied.
///
/// 32 random bytes, hex encoded. Sessions do not survive a restart in that case.
fn generate_secret() -> Zeroizing<String> {
    let mut rng = rand::rng();
    let mut bytes = Zeroizing::new([0u8; 32]);
    rng.fill(&mut bytes[..]);
    Zeroizing::new(hex::encode(&bytes[..]))
}

/// Files are addressed by plain name inside a single directory.
fn validate_file_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be a plain file name".to_string(),
        ));
    }
    Ok(())
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Runtime configuration, read from the environment once at startup and
/// passed down explicitly.
pub struct Config {
    pub port: u16,
    /// MongoDB connection string. When absent the server runs against the
    /// in-memory store instead.
    pub mongo_url: Option<String>,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "4000"),
            mongo_url: env::var("MONGO_URL").ok(),
            upload_dir: PathBuf::from(try_load::<String>("UPLOAD_DIR", "uploads")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

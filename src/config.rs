use std::env;
use std::path::PathBuf;

/// Server configuration read from the environment.
///
/// `FPL_HOST` / `FPL_PORT` control the listen address (defaults
/// `0.0.0.0:8050`), `FPL_DATA_DIR` points at the directory holding the
/// CSV snapshot (default `data`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("FPL_HOST").ok(),
            env::var("FPL_PORT").ok(),
            env::var("FPL_DATA_DIR").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, data_dir: Option<String>) -> Self {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .unwrap_or_else(|_| panic!("FPL_PORT must be a valid port number, got '{}'", raw)),
            None => 8050,
        };

        Config {
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            data_dir: data_dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data")),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

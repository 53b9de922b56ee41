//! Service configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::warn;

/// Port used when neither PORT nor --port is given
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings, layered from defaults, environment, and CLI flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Listening port
    pub port: u16,

    /// Explicit yt-dlp binary; discovery runs when unset
    pub ytdlp_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ytdlp_path: None,
        }
    }
}

impl Settings {
    /// Read settings from the environment on top of the defaults
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(p) => settings.port = p,
                Err(_) => warn!("Ignoring unparseable PORT value: {port}"),
            }
        }
        if let Ok(path) = std::env::var("YTDLP_PATH") {
            if !path.is_empty() {
                settings.ytdlp_path = Some(PathBuf::from(path));
            }
        }

        settings
    }

    /// Address the server binds; all interfaces, callers are remote
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;

/// RFQ desk server.
#[derive(Parser, Debug, Clone)]
#[command(name = "rfq_desk", about = "Quote-request intake and fulfillment tracker")]
pub struct Config {
    /// Listen address.
    #[arg(long, env = "RFQ_LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: String,

    /// Username of the admin account created at startup.
    #[arg(long, env = "RFQ_ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Password of the startup admin account. Hashed before it is stored.
    #[arg(long, env = "RFQ_ADMIN_PASSWORD", default_value = "ds2025", hide_env_values = true, hide_default_value = true)]
    pub admin_password: String,

    /// Upper bound on a single link-preview page fetch, in seconds.
    #[arg(long, env = "RFQ_PREVIEW_TIMEOUT_SECS", default_value_t = 10)]
    pub preview_timeout_secs: u64,

    /// Message buffer of each record actor.
    #[arg(long, env = "RFQ_ACTOR_BUFFER", default_value_t = 32)]
    pub actor_buffer: usize,
}

impl Config {
    pub fn preview_timeout(&self) -> Duration {
        Duration::from_secs(self.preview_timeout_secs)
    }
}

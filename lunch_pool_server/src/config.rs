use std::env;

use chrono::Duration;
use log::*;
use lpg_common::helpers::parse_boolean_flag;

const DEFAULT_LPG_HOST: &str = "127.0.0.1";
const DEFAULT_LPG_PORT: u16 = 8360;
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::seconds(2);
const DEFAULT_CHAT_WINDOW: Duration = Duration::hours(1);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// The cadence of the live-refresh worker. Every viewer converges on the same pool snapshot within one tick.
    pub refresh_interval: Duration,
    /// The rolling window of chat history shown to clients. Older messages stay in storage but fall out of view.
    pub chat_window: Duration,
    /// When true (the default), embedded schema migrations run against the database on startup.
    pub auto_migrate: bool,
    /// Disables the live-refresh worker. Mostly useful in tests, where the ticking is just noise.
    pub disable_refresh_worker: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_LPG_HOST.to_string(),
            port: DEFAULT_LPG_PORT,
            database_url: String::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            chat_window: DEFAULT_CHAT_WINDOW,
            auto_migrate: true,
            disable_refresh_worker: false,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("LPG_HOST").ok().unwrap_or_else(|| DEFAULT_LPG_HOST.into());
        let port = env::var("LPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for LPG_PORT. {e} Using the default, {DEFAULT_LPG_PORT}, instead."
                    );
                    DEFAULT_LPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_LPG_PORT);
        let database_url = env::var("LPG_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ LPG_DATABASE_URL is not set. Please set it to the URL for the lunch pool database.");
            String::default()
        });
        let refresh_interval = duration_from_env("LPG_REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL);
        let chat_window = duration_from_env("LPG_CHAT_WINDOW_SECS", DEFAULT_CHAT_WINDOW);
        let auto_migrate = parse_boolean_flag(env::var("LPG_AUTO_MIGRATE").ok(), true);
        let disable_refresh_worker = parse_boolean_flag(env::var("LPG_DISABLE_REFRESH_WORKER").ok(), false);
        Self { host, port, database_url, refresh_interval, chat_window, auto_migrate, disable_refresh_worker }
    }
}

fn duration_from_env(var: &str, default: Duration) -> Duration {
    env::var(var)
        .map_err(|_| {
            info!("🪛️ {var} is not set. Using the default value of {} s.", default.num_seconds());
        })
        .and_then(|s| {
            s.parse::<i64>().map(Duration::seconds).map_err(|e| {
                warn!("🪛️ Invalid configuration value for {var}. {e}");
            })
        })
        .ok()
        .filter(|d| {
            let positive = *d > Duration::zero();
            if !positive {
                warn!("🪛️ {var} must be positive. Using the default of {} s instead.", default.num_seconds());
            }
            positive
        })
        .unwrap_or(default)
}

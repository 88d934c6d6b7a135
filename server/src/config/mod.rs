use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub mod cors;

pub use cors::create_cors_layer;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "web3";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_SSLMODE: &str = "disable";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. `DATABASE_URL` wins over the
    /// individual `DB_*` parts.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                let password = lookup("DB_PASSWORD").unwrap_or_default();
                let credentials = match lookup("DB_USER") {
                    Some(user) if password.is_empty() => user,
                    Some(user) => format!("{user}:{password}"),
                    None if password.is_empty() => DEFAULT_DB_USER.to_string(),
                    None => format!("{DEFAULT_DB_USER}:{password}"),
                };

                format!(
                    "postgres://{}@{}:{}/{}?sslmode={}",
                    credentials,
                    lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                    parse_or("DB_PORT", lookup("DB_PORT"), DEFAULT_DB_PORT),
                    lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
                    lookup("DB_SSLMODE").unwrap_or_else(|| DEFAULT_DB_SSLMODE.to_string()),
                )
            });

        Self {
            database_url,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            ),
            host: parse_or(
                "SERVER_HOST",
                lookup("SERVER_HOST"),
                IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            ),
            port: parse_or("SERVER_PORT", lookup("SERVER_PORT"), DEFAULT_SERVER_PORT),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The connection string with any password replaced, for logging.
    pub fn redacted_database_url(&self) -> String {
        redact_password(&self.database_url)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Config: Invalid value '{}' for {}, using default", value, key);
            default
        }),
        None => default,
    }
}

fn redact_password(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    let Some(at) = url[scheme_end..].find('@').map(|i| i + scheme_end) else {
        return url.to_string();
    };

    match url[scheme_end..at].find(':') {
        Some(colon) => format!("{}:***{}", &url[..scheme_end + colon], &url[at..]),
        None => url.to_string(),
    }
}

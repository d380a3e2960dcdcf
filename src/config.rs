use std::env;

/// Header value a caller must present in `User-Access`.
pub const ACCESS_TOKEN: &str = "superuser";

/// Longest expression accepted in the `q` parameter, in characters.
pub const MAX_QUERY_LENGTH: usize = 200;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub access_token: String,
    pub max_query_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            access_token: ACCESS_TOKEN.to_string(),
            max_query_length: MAX_QUERY_LENGTH,
        }
    }
}

impl AppConfig {
    /// Listen address from `HOST`/`PORT`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("⚠️  Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            host,
            port,
            ..defaults
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: CorsOrigins,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. A `*` entry anywhere allows every origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let mongo_url = env_required("MONGO_URL")?;
        let db_name = env_required("DB_NAME")?;

        let cors_origins = CorsOrigins::parse(&env_or("CORS_ORIGINS", "*"));

        let host: IpAddr = env_or("EVOLUTE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid EVOLUTE_HOST: {e}"))?;

        let port: u16 = env_or("EVOLUTE_PORT", "8001")
            .parse()
            .map_err(|e| format!("Invalid EVOLUTE_PORT: {e}"))?;

        let max_body_size: usize = env_or("EVOLUTE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid EVOLUTE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("EVOLUTE_LOG_LEVEL", "info");

        Ok(Config {
            mongo_url,
            db_name,
            cors_origins,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("Missing required environment variable: {key}")),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_allows_any_origin() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse("https://a.com,*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse(""), CorsOrigins::Any);
    }

    #[test]
    fn origin_list_is_trimmed() {
        assert_eq!(
            CorsOrigins::parse(" https://evolute.io/ , http://localhost:3000,"),
            CorsOrigins::List(vec![
                "https://evolute.io".to_string(),
                "http://localhost:3000".to_string(),
            ])
        );
    }
}

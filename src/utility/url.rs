use crate::core::config::Config;

/// Public URL for `path` on the configured domain.
pub fn url(config: &Config, path: &str) -> String {
    let scheme = if config.https { "https" } else { "http" };
    let path = path.trim_start_matches('/');

    if config.https || config.domain != "localhost" {
        format!("{scheme}://{}/{path}", config.domain)
    } else {
        format!("{scheme}://{}:{}/{path}", config.domain, config.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domain: &str, https: bool) -> Config {
        Config {
            domain: domain.into(),
            host: "127.0.0.1".into(),
            https,
            port: 8080,
            database_url: String::new(),
            db_max_connections: 1,
            db_min_connections: 1,
            db_acquire_timeout_seconds: 1,
            query_timeout_seconds: 1,
            log_retention_days: 1,
        }
    }

    #[test]
    fn localhost_keeps_the_port() {
        assert_eq!(url(&config("localhost", false), "/"), "http://localhost:8080/");
    }

    #[test]
    fn public_domains_drop_the_port() {
        assert_eq!(
            url(&config("vn.example.org", true), "/api/v1/vns"),
            "https://vn.example.org/api/v1/vns"
        );
    }
}

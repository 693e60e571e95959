use std::net::SocketAddr;

use anyhow::{Context, Result};
use wishlist_api::HashParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub hash: HashParams,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = HashParams::default();

        let host = lookup("WISHLIST_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "WISHLIST_PORT", 8080)?;
        let hash = HashParams {
            memory_kib: parse_or(&lookup, "WISHLIST_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "WISHLIST_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "WISHLIST_HASH_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Self { host, port, hash })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.hash, HashParams::default());
        assert_eq!(cfg.addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("WISHLIST_HOST", "127.0.0.1"),
            ("WISHLIST_PORT", "9000"),
            ("WISHLIST_HASH_MEMORY_KIB", "4096"),
            ("WISHLIST_HASH_ITERATIONS", "3"),
        ])
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.hash.memory_kib, 4096);
        assert_eq!(cfg.hash.iterations, 3);
        assert_eq!(cfg.hash.parallelism, 1);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config(&[("WISHLIST_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("WISHLIST_PORT"));
    }

    #[test]
    fn test_invalid_host_fails_at_addr() {
        let cfg = config(&[("WISHLIST_HOST", "not a host")]).unwrap();
        assert!(cfg.addr().is_err());
    }
}

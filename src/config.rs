use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use url::Url;

use crate::provider::ItunesEndpoints;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub endpoints: ItunesEndpoints,
}

impl Config {
    /// Read `APPSCOUT_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_var)
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> anyhow::Result<Option<String>>,
    {
        let host = match lookup("APPSCOUT_HOST")? {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("APPSCOUT_HOST is not an ip address: {}", raw))?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("APPSCOUT_PORT")? {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APPSCOUT_PORT is not a port number: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let defaults = ItunesEndpoints::default();
        let endpoints = ItunesEndpoints {
            search: endpoint(&lookup, "APPSCOUT_SEARCH_URL", defaults.search)?,
            hints: endpoint(&lookup, "APPSCOUT_HINTS_URL", defaults.hints)?,
            lookup: endpoint(&lookup, "APPSCOUT_LOOKUP_URL", defaults.lookup)?,
        };

        Ok(Self {
            host,
            port,
            endpoints,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn endpoint<F>(lookup: &F, name: &str, default: Url) -> anyhow::Result<Url>
where
    F: Fn(&str) -> anyhow::Result<Option<String>>,
{
    match lookup(name)? {
        Some(raw) => Url::parse(&raw).with_context(|| format!("{} is not a valid url", name)),
        None => Ok(default),
    }
}

/// Unset and blank variables both fall back to defaults.
fn env_var(name: &str) -> anyhow::Result<Option<String>> {
    match env::var(name) {
        Ok(value) => {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            Ok(Some(value.to_string()))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            anyhow::bail!("{} is not valid unicode", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| Ok(vars.get(name).cloned()))
    }

    #[test]
    fn defaults_listen_on_port_3000() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.endpoints.lookup.as_str(), "https://itunes.apple.com/lookup");
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("APPSCOUT_HOST", "127.0.0.1"),
            ("APPSCOUT_PORT", "8080"),
            ("APPSCOUT_LOOKUP_URL", "http://localhost:9000/lookup"),
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.endpoints.lookup.as_str(), "http://localhost:9000/lookup");
        assert_eq!(
            config.endpoints.hints.as_str(),
            "https://search.itunes.apple.com/WebObjects/MZSearchHints.woa/wa/hints"
        );
    }

    #[test]
    fn invalid_values_fail() {
        assert!(config_from(&[("APPSCOUT_PORT", "http")]).is_err());
        assert!(config_from(&[("APPSCOUT_HOST", "localhost")]).is_err());
        assert!(config_from(&[("APPSCOUT_SEARCH_URL", "not a url")]).is_err());
    }
}

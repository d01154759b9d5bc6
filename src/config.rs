use anyhow::{bail, Context, Result};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    /// Fixed seed for requests that don't pass their own.
    pub series_seed: Option<u64>,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            series_seed: None,
            preview_rows: 5,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => v
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not a valid IP address: {}", v))?,
            None => defaults.host,
        };
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", v))?,
            None => defaults.port,
        };
        let series_seed = match lookup("SERIES_SEED") {
            Some(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("SERIES_SEED is not an unsigned integer: {}", v))?,
            ),
            _ => None,
        };
        let preview_rows = match lookup("PREVIEW_ROWS") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("PREVIEW_ROWS is not a number: {}", v))?,
            None => defaults.preview_rows,
        };

        let settings = Self {
            host,
            port,
            series_seed,
            preview_rows,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=50).contains(&self.preview_rows) {
            bail!("PREVIEW_ROWS must be between 1 and 50 (got {})", self.preview_rows);
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.addr(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(settings.series_seed, None);
        assert_eq!(settings.preview_rows, 5);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SERIES_SEED", "42"),
            ("PREVIEW_ROWS", "10"),
        ]))
        .unwrap();
        assert_eq!(settings.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(settings.series_seed, Some(42));
        assert_eq!(settings.preview_rows, 10);
    }

    #[test]
    fn test_blank_seed_means_unseeded() {
        let settings = Settings::from_lookup(lookup_from(&[("SERIES_SEED", "  ")])).unwrap();
        assert_eq!(settings.series_seed, None);
    }

    #[test]
    fn test_bad_values_name_the_variable() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = Settings::from_lookup(lookup_from(&[("SERIES_SEED", "-3")])).unwrap_err();
        assert!(err.to_string().contains("SERIES_SEED"));

        let err = Settings::from_lookup(lookup_from(&[("PREVIEW_ROWS", "0")])).unwrap_err();
        assert!(err.to_string().contains("PREVIEW_ROWS"));
    }
}

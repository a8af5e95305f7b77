//! Runtime configuration utilities for air-risk.

use std::{env, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the remote air-quality service.
    pub api_url: String,
    /// Per-request timeout for the remote service.
    pub http_timeout: Duration,
    /// Grid spacing in degrees for regional overviews.
    pub region_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(15),
            region_step: 0.25,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_url = lookup("AIR_API_URL").unwrap_or(defaults.api_url);
        let http_timeout = match lookup("AIR_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("parsing AIR_HTTP_TIMEOUT_SECS={raw:?}"))?;
                if secs == 0 {
                    bail!("AIR_HTTP_TIMEOUT_SECS must be positive");
                }
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };
        let region_step = match lookup("AIR_REGION_STEP") {
            Some(raw) => {
                let step: f64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("parsing AIR_REGION_STEP={raw:?}"))?;
                if !(step.is_finite() && step > 0.0) {
                    bail!("AIR_REGION_STEP must be a positive number of degrees");
                }
                step
            }
            None => defaults.region_step,
        };

        Ok(Self {
            api_url,
            http_timeout,
            region_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.http_timeout, Duration::from_secs(15));
        assert_eq!(settings.region_step, 0.25);
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("AIR_API_URL", "https://aq.example.org"),
            ("AIR_HTTP_TIMEOUT_SECS", "5"),
            ("AIR_REGION_STEP", "0.5"),
        ]))
        .unwrap();
        assert_eq!(settings.api_url, "https://aq.example.org");
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
        assert_eq!(settings.region_step, 0.5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Settings::from_lookup(lookup_from(&[("AIR_HTTP_TIMEOUT_SECS", "0")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("AIR_REGION_STEP", "-1")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("AIR_REGION_STEP", "abc")])).is_err());
    }
}

//! Runtime configuration read from the environment.
//!
//! Every setting has a default that is logged when the variable is absent. A value that
//! is present but unusable is an error rather than a silent fallback.

use crate::pricing::TotalPolicy;
use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    /// Capacity of every actor's request channel.
    pub channel_buffer: usize,
    pub otp_ttl: Duration,
    pub otp_sweep_interval: Duration,
    pub total_policy: TotalPolicy,
    /// Return issued verification codes in the HTTP response (demo only).
    pub echo_otp: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            bind: try_load(&lookup, "DEVDINE_BIND", "0.0.0.0:3000")?,
            channel_buffer: try_load(&lookup, "DEVDINE_CHANNEL_BUFFER", "32")?,
            otp_ttl: Duration::from_secs(try_load(&lookup, "DEVDINE_OTP_TTL_SECS", "300")?),
            otp_sweep_interval: Duration::from_secs(try_load(
                &lookup,
                "DEVDINE_OTP_SWEEP_SECS",
                "60",
            )?),
            total_policy: try_load(&lookup, "DEVDINE_TOTAL_POLICY", "trust")?,
            echo_otp: try_load(&lookup, "DEVDINE_ECHO_OTP", "false")?,
        };

        positive("DEVDINE_CHANNEL_BUFFER", config.channel_buffer as u64)?;
        positive("DEVDINE_OTP_TTL_SECS", config.otp_ttl.as_secs())?;
        positive("DEVDINE_OTP_SWEEP_SECS", config.otp_sweep_interval.as_secs())?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            channel_buffer: 32,
            otp_ttl: Duration::from_secs(300),
            otp_sweep_interval: Duration::from_secs(60),
            total_policy: TotalPolicy::Trust,
            echo_otp: false,
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn positive(key: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        let default = Config::default();

        assert_eq!(config.bind, default.bind);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.otp_ttl, Duration::from_secs(300));
        assert_eq!(config.total_policy, TotalPolicy::Trust);
        assert!(!config.echo_otp);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DEVDINE_BIND", "127.0.0.1:8080"),
            ("DEVDINE_TOTAL_POLICY", "verify"),
            ("DEVDINE_ECHO_OTP", "true"),
            ("DEVDINE_OTP_TTL_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.total_policy, TotalPolicy::Verify);
        assert!(config.echo_otp);
        assert_eq!(config.otp_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("DEVDINE_CHANNEL_BUFFER", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEVDINE_CHANNEL_BUFFER", .. }));

        let err = Config::from_lookup(lookup(&[("DEVDINE_TOTAL_POLICY", "guess")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEVDINE_TOTAL_POLICY", .. }));

        let err = Config::from_lookup(lookup(&[("DEVDINE_OTP_SWEEP_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEVDINE_OTP_SWEEP_SECS", .. }));
    }
}

//! Runtime configuration from environment variables: HOST, PORT, TIEBREAK_MAX_ROUNDS.

use std::str::FromStr;

/// Tie-break rounds played before a persisting tie is reported as a deadlock.
pub const DEFAULT_MAX_TIEBREAK_ROUNDS: u32 = 3;

/// Settings used by the winner resolver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolverSettings {
    pub max_tiebreak_rounds: u32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            max_tiebreak_rounds: DEFAULT_MAX_TIEBREAK_ROUNDS,
        }
    }
}

/// Server configuration. Unset or unparseable variables fall back to defaults.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub resolver: ResolverSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            resolver: ResolverSettings::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or("PORT", lookup("PORT"), defaults.port);
        let rounds = parse_or(
            "TIEBREAK_MAX_ROUNDS",
            lookup("TIEBREAK_MAX_ROUNDS"),
            defaults.resolver.max_tiebreak_rounds,
        );
        let max_tiebreak_rounds = if rounds == 0 {
            log::warn!("TIEBREAK_MAX_ROUNDS must be at least 1, using 1");
            1
        } else {
            rounds
        };
        Self {
            host,
            port,
            resolver: ResolverSettings { max_tiebreak_rounds },
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {}={:?}, using default {}", key, value, default);
            default
        }),
    }
}

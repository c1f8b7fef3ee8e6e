// Seed configuration - environment driven, with an optional .env file

use crate::errors::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "finexp.db";
pub const DEFAULT_DEMO_EMAIL: &str = "demo@finexp.com";
pub const DEFAULT_DEMO_NAME: &str = "Demo User";
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: DEFAULT_DEMO_EMAIL.into(),
            name: DEFAULT_DEMO_NAME.into(),
            password: DEFAULT_DEMO_PASSWORD.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub database_path: PathBuf,
    pub demo: DemoAccount,
    pub bcrypt_cost: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            demo: DemoAccount::default(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl SeedConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = SeedConfig::default();

        let bcrypt_cost = match get("FINEXP_BCRYPT_COST") {
            Some(raw) => parse_cost(&raw)?,
            None => defaults.bcrypt_cost,
        };

        Ok(SeedConfig {
            database_path: get("FINEXP_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            demo: DemoAccount {
                email: get("FINEXP_DEMO_EMAIL").unwrap_or(defaults.demo.email),
                name: get("FINEXP_DEMO_NAME").unwrap_or(defaults.demo.name),
                password: get("FINEXP_DEMO_PASSWORD").unwrap_or(defaults.demo.password),
            },
            bcrypt_cost,
        })
    }
}

fn parse_cost(raw: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        var: "FINEXP_BCRYPT_COST",
        expected: "an integer between 4 and 31",
        value: raw.to_string(),
    };
    let cost: u32 = raw.trim().parse().map_err(|_| invalid())?;
    if (BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        Ok(cost)
    } else {
        Err(invalid())
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
        let config = SeedConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SeedConfig::default());
        assert_eq!(config.demo.email, "demo@finexp.com");
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = SeedConfig::from_lookup(lookup_from(&[
            ("FINEXP_DATABASE_PATH", "/tmp/seed.db"),
            ("FINEXP_DEMO_NAME", "  "),
            ("FINEXP_BCRYPT_COST", "12"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/seed.db"));
        assert_eq!(config.demo.name, DEFAULT_DEMO_NAME);
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    fn test_rejects_out_of_range_cost() {
        for raw in ["3", "32", "ten"] {
            let err = SeedConfig::from_lookup(lookup_from(&[("FINEXP_BCRYPT_COST", raw)]))
                .unwrap_err();
            assert!(err.to_string().contains("FINEXP_BCRYPT_COST"));
        }
    }
}

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_SEED_NAME: &str = "User";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// A login created on startup when it does not exist yet.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
    pub seed_user: Option<SeedUser>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let pool_size = parse_or(
            "DATABASE_POOL_SIZE",
            lookup("DATABASE_POOL_SIZE"),
            DEFAULT_POOL_SIZE,
        )?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: "0".to_string(),
            });
        }

        let seed_user = match (lookup("SEED_USER_EMAIL"), lookup("SEED_USER_PASSWORD")) {
            (Some(email), Some(password)) => Some(SeedUser {
                name: lookup("SEED_USER_NAME").unwrap_or_else(|| DEFAULT_SEED_NAME.to_string()),
                email,
                password,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("SEED_USER_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("SEED_USER_EMAIL")),
        };

        Ok(Settings {
            database_url,
            host,
            port,
            pool_size,
            seed_user,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/db")]).unwrap();
        assert_eq!(s.database_url, "postgres://localhost/db");
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(s.pool_size, 10);
        assert!(s.seed_user.is_none());
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(settings(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = settings(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
        assert_eq!(err.to_string(), "PORT has an invalid value 'eighty'");
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        assert!(settings(&[("DATABASE_URL", "x"), ("DATABASE_POOL_SIZE", "0")]).is_err());
    }

    #[test]
    fn seed_user_needs_both_email_and_password() {
        let s = settings(&[
            ("DATABASE_URL", "x"),
            ("SEED_USER_EMAIL", "user@nextmail.com"),
            ("SEED_USER_PASSWORD", "123456"),
        ])
        .unwrap();
        let seed = s.seed_user.expect("seed user expected");
        assert_eq!(seed.name, "User");
        assert_eq!(seed.email, "user@nextmail.com");

        assert_eq!(
            settings(&[("DATABASE_URL", "x"), ("SEED_USER_EMAIL", "user@nextmail.com")]),
            Err(ConfigError::Missing("SEED_USER_PASSWORD"))
        );
    }

    #[test]
    fn seed_user_debug_hides_password() {
        let seed = SeedUser {
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(!format!("{:?}", seed).contains("123456"));
    }
}

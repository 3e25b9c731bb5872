use crate::error::ServerError;

pub const ROUTE_PREFIX_VAR: &str = "FUNCTION_ROUTE_PREFIX";
pub const DEFAULT_ROUTE_PREFIX: &str = "api";

/// Host settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path segment every function is mounted under, without slashes.
    /// Empty mounts functions at the root.
    pub route_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ROUTE_PREFIX_VAR).unwrap_or_else(|| DEFAULT_ROUTE_PREFIX.to_string());
        let route_prefix = raw.trim_matches('/');

        if route_prefix
            .chars()
            .any(|c| c.is_whitespace() || c == '?' || c == '#')
        {
            return Err(ServerError::Configuration(format!(
                "{ROUTE_PREFIX_VAR} is not a valid path prefix: {raw:?}"
            )));
        }

        Ok(Self {
            route_prefix: route_prefix.to_string(),
        })
    }
}

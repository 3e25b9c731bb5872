use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::config::Config;
use crate::error::ServerError;
use crate::greeting::httpget;

/// Key level the host requires before invoking a function. Enforced by the
/// host, never by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLevel {
    Anonymous,
    Function,
    Admin,
}

impl fmt::Display for AuthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            AuthLevel::Anonymous => "anonymous",
            AuthLevel::Function => "function",
            AuthLevel::Admin => "admin",
        };
        f.write_str(level)
    }
}

impl FromStr for AuthLevel {
    type Err = ServerError;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.to_ascii_lowercase().as_str() {
            "anonymous" => Ok(AuthLevel::Anonymous),
            "function" => Ok(AuthLevel::Function),
            "admin" => Ok(AuthLevel::Admin),
            other => Err(ServerError::Configuration(format!(
                "unknown auth level: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub methods: &'static [Method],
    pub auth_level: AuthLevel,
}

pub const HTTPGET: FunctionDescriptor = FunctionDescriptor {
    name: "httpget",
    methods: &[Method::GET],
    auth_level: AuthLevel::Function,
};

impl FunctionDescriptor {
    pub fn route(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            format!("/{}", self.name)
        } else {
            format!("/{prefix}/{}", self.name)
        }
    }

    pub fn method_filter(&self) -> Result<MethodFilter, ServerError> {
        let mut combined: Option<MethodFilter> = None;
        for method in self.methods {
            let filter = MethodFilter::try_from(method.clone())
                .map_err(|err| ServerError::Configuration(format!("{}: {err}", self.name)))?;
            combined = Some(match combined {
                Some(acc) => acc.or(filter),
                None => filter,
            });
        }
        combined.ok_or_else(|| {
            ServerError::Configuration(format!("{} declares no methods", self.name))
        })
    }
}

pub fn router(config: &Config) -> Result<Router, ServerError> {
    let path = HTTPGET.route(&config.route_prefix);
    let filter = HTTPGET.method_filter()?;

    tracing::info!(
        function = HTTPGET.name,
        route = %path,
        methods = ?HTTPGET.methods,
        auth_level = %HTTPGET.auth_level,
        "registered function"
    );

    Ok(Router::new().route(&path, on(filter, httpget)))
}

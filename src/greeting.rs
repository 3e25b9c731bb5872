use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::Uri;

use crate::error::ServerError;

pub const DEFAULT_NAME: &str = "world";

/// First `name` value in the query string, percent-decoded.
pub fn query_name(uri: &Uri) -> Option<String> {
    form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned())
}

/// Picks the name to greet: a non-empty query value, then a non-empty body,
/// then [`DEFAULT_NAME`].
pub fn resolve_name<'a>(query_name: Option<&'a str>, body: Option<&'a str>) -> &'a str {
    query_name
        .filter(|name| !name.is_empty())
        .or_else(|| body.filter(|text| !text.is_empty()))
        .unwrap_or(DEFAULT_NAME)
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Handler for the `httpget` function.
///
/// The body is only read when the query string does not carry a name, and is
/// decoded lossily.
pub async fn httpget(request: Request) -> Result<String, ServerError> {
    tracing::info!(
        "Http function processed request for url \"{}\"",
        request.uri()
    );

    let name = query_name(request.uri()).filter(|name| !name.is_empty());

    let bytes = match name {
        Some(_) => None,
        None => Some(Bytes::from_request(request, &()).await?),
    };
    let text = bytes.as_deref().map(String::from_utf8_lossy);

    Ok(greeting(resolve_name(name.as_deref(), text.as_deref())))
}

//! Turns parsed command-line options into a `RequestBuilder`.

use crate::app::url::normalize_url;
use crate::config::Cli;
use crate::error_handling::RequestError;
use crate::request::RequestBuilder;

/// Splits `Name: value` into its parts.
fn parse_header(raw: &str) -> Result<(&str, &str), RequestError> {
    raw.split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| RequestError::InvalidHeader(format!("expected 'Name: value', got {raw:?}")))
}

/// Splits `name=value`; a missing `=` yields an empty value.
fn parse_pair(raw: &str) -> (&str, &str) {
    raw.split_once('=').unwrap_or((raw, ""))
}

/// Builds a request from CLI options.
///
/// Options are applied in order: address, method, headers, cookies, query,
/// body, redirects. The first invalid option aborts.
///
/// # Errors
///
/// Any `RequestError` raised by the corresponding builder mutator.
pub fn build_request(cli: &Cli) -> Result<RequestBuilder, RequestError> {
    let mut request = RequestBuilder::new();
    request.set_address(&normalize_url(&cli.url))?;
    request.set_method(&cli.method)?;

    for raw in &cli.headers {
        let (name, value) = parse_header(raw)?;
        request.add_header(name, value)?;
    }

    for raw in &cli.cookies {
        let (name, value) = parse_pair(raw);
        request.add_cookie(name, value)?;
    }

    for raw in &cli.query {
        let (name, value) = parse_pair(raw);
        request.add_query(name, value);
    }

    if let Some(data) = &cli.data {
        request.set_body_as_string(data);
    }

    request.set_max_redirects(cli.max_redirects);
    Ok(request)
}

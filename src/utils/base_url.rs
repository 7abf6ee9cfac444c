//! Base origin of the incoming request, used to build full short URLs.

use axum::http::{HeaderMap, Uri, header};

/// Header set by reverse proxies carrying the original scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Returns the origin short URLs are built from, always ending with `/`.
///
/// Resolution order:
/// 1. `configured` (from `PUBLIC_BASE_URL`), when set
/// 2. `X-Forwarded-Proto` (default `http`) + `Host` header
/// 3. The authority of the request URI
/// 4. `localhost`
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt".parse().unwrap());
///
/// let base = request_base_url(None, &headers, &Uri::from_static("/shorten"));
/// assert_eq!(base, "http://sho.rt/");
/// ```
pub fn request_base_url(configured: Option<&str>, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(base) = configured {
        return with_trailing_slash(base);
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    format!("{}://{}/", scheme, host)
}

/// Joins a base origin and a short code.
pub fn short_url(base: &str, short_code: &str) -> String {
    format!("{}{}", with_trailing_slash(base), short_code)
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

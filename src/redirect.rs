//! Redirect responses for the form endpoints.

use axum::{
    http::{HeaderMap, StatusCode, header::LOCATION, header::REFERER},
    response::{IntoResponse, Response},
};

use crate::{endpoints, expense::YearMonth};

/// Redirect the client to `url` with a 302 Found response.
///
/// Browsers follow a 302 after a form POST with a GET request.
pub(crate) fn found(url: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, url.to_owned())]).into_response()
}

/// The URL of the expenses page for `month`, e.g. "/?month=2024-03".
pub(crate) fn month_url(month: YearMonth) -> String {
    match serde_urlencoded::to_string([("month", month.to_string())]) {
        Ok(query) => format!("{}?{query}", endpoints::ROOT),
        Err(error) => {
            tracing::error!("Could not encode month {month} as a query string: {error}");
            endpoints::ROOT.to_owned()
        }
    }
}

/// The page the request came from, or the expenses page if it is unknown.
pub(crate) fn referrer_or_root(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|referrer| referrer.to_str().ok())
        .filter(|referrer| !referrer.is_empty())
        .unwrap_or(endpoints::ROOT)
        .to_owned()
}

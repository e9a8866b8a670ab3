//! Kakeibo is a web app for keeping a household expense ledger.
//!
//! Expenses are recorded with a date, an integer amount, a category and an
//! optional memo. The app lists the expenses for a month along with the
//! month's total and a per-category breakdown.
//!
//! This library provides the HTTP routes, which directly serve HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
mod database_id;
mod db;
mod endpoints;
mod expense;
mod error_pages;
mod html;
mod logging;
mod redirect;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{Config, DEFAULT_DATABASE_URL, DatabaseLocation, DatabaseUrl};
pub use database_id::ExpenseId;
pub use db::initialize as initialize_db;
pub use expense::{
    CategoryTotal, DEFAULT_CATEGORY, Expense, NewExpense, YearMonth, by_category, count_expenses,
    create_expense, get_expense, total,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;

use crate::{error_pages::InternalServerError, html::error_view};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount of an expense could not be parsed as a whole number.
    ///
    /// Callers should pass in the text that failed to parse.
    #[error("\"{0}\" is not a valid whole number amount")]
    InvalidAmount(String),

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A month string was not a valid `YYYY-MM` month.
    #[error("\"{0}\" is not a valid month, expected YYYY-MM")]
    InvalidMonth(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The database URL names a backend that this app cannot open.
    #[error("unsupported database URL \"{0}\", only SQLite URLs and file paths are supported")]
    UnsupportedDatabaseUrl(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => error_pages::get_404_not_found_response(),
            Error::InvalidDate(_) | Error::InvalidAmount(_) => {
                bad_request_response("Could not save the expense.", &self.to_string())
            }
            Error::InvalidMonth(_) => bad_request_response(
                "Could not show the expenses for that month.",
                &self.to_string(),
            ),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

fn bad_request_response(description: &str, fix: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        error_view("Bad Request", "400", description, fix),
    )
        .into_response()
}

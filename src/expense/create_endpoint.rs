//! Defines the endpoint for creating a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    expense::{
        Expense, YearMonth,
        core::create_expense,
        month::parse_iso_date,
    },
    redirect,
    timezone::current_local_date,
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating an expense.
///
/// Every field is optional so that a missing amount can be handled by the
/// endpoint instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// The date the money was spent as `YYYY-MM-DD`, defaults to today.
    #[serde(default)]
    pub spent_date: Option<String>,
    /// The amount spent as a whole number.
    #[serde(default)]
    pub amount: Option<String>,
    /// The category, defaults to [crate::expense::DEFAULT_CATEGORY].
    #[serde(default)]
    pub category: Option<String>,
    /// An optional note.
    #[serde(default)]
    pub memo: Option<String>,
}

/// A route handler for creating a new expense.
///
/// Redirects to the expenses page for the month of the new expense on success.
/// If the amount is missing or not a whole number, no expense is created and
/// the client is redirected to the expenses page for the current month.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let amount = match parse_amount(form.amount.as_deref()) {
        Ok(amount) => amount,
        Err(error) => {
            tracing::warn!("Ignoring expense form: {error}");
            return redirect::found(endpoints::ROOT);
        }
    };

    let spent_date = match form.spent_date.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => parse_iso_date(text),
        _ => current_local_date(&state.local_timezone),
    };

    let spent_date = match spent_date {
        Ok(spent_date) => spent_date,
        Err(error) => {
            tracing::warn!("Could not get the date for a new expense: {error}");
            return error.into_response();
        }
    };

    let expense = Expense::build(amount, spent_date)
        .category(form.category.as_deref().unwrap_or_default())
        .memo(form.memo.as_deref().unwrap_or_default());

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_expense(expense, &connection) {
        Ok(expense) => {
            tracing::debug!("Created expense {}", expense.id);
            redirect::found(&redirect::month_url(YearMonth::containing(
                expense.spent_date,
            )))
        }
        Err(error) => {
            tracing::error!("could not create expense: {error}");
            error.into_response()
        }
    }
}

/// Parse a whole number amount, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is missing or is not a whole number.
fn parse_amount(text: Option<&str>) -> Result<i64, Error> {
    let text = text.unwrap_or_default();

    text.trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))
}

//! Defines the endpoint for deleting an expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State, rejection::PathRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, ExpenseId, error_pages::get_404_not_found_response,
    expense::core::delete_expense, redirect,
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting an expense.
///
/// Deleting an expense that does not exist is not an error. Either way the
/// client is redirected back to the page it came from.
///
/// An ID that is not a non-negative whole number does not name a route, so it
/// gets the 404 page.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    headers: HeaderMap,
) -> Response {
    let expense_id = match expense_id {
        Ok(Path(expense_id)) if expense_id >= 0 => expense_id,
        Ok(Path(expense_id)) => {
            tracing::debug!("Rejecting negative expense ID {expense_id}");
            return get_404_not_found_response();
        }
        Err(rejection) => {
            tracing::debug!("Rejecting expense ID: {rejection}");
            return get_404_not_found_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_expense(expense_id, &connection) {
        Ok(0) => tracing::debug!("Expense {expense_id} does not exist, nothing to delete"),
        Ok(_) => tracing::debug!("Deleted expense {expense_id}"),
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            return error.into_response();
        }
    }

    redirect::found(&redirect::referrer_or_root(&headers))
}

//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    error_pages::get_404_not_found,
    expense::{create_expense_endpoint, delete_expense_endpoint, get_expenses_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::ADD_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, post(delete_expense_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

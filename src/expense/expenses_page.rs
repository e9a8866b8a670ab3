//! Defines the route handler for the page that lists a month of expenses.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error, timezone::current_local_date};

use super::{
    month::YearMonth,
    query::get_expenses_in_month,
    summary::{by_category, total},
    view::{ExpensesView, expenses_view},
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The database connection for managing expenses.
    db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    local_timezone: String,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesQuery {
    /// The month to show as `YYYY-MM`, defaults to the current month.
    pub month: Option<String>,
}

/// Render the expenses for a month along with the month's totals.
///
/// A month that is not a valid `YYYY-MM` string shows no expenses.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;

    let (month_text, month) = match query.month.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => {
            let month = text
                .parse::<YearMonth>()
                .inspect_err(|error| tracing::debug!("Showing no expenses: {error}"))
                .ok();
            (text.to_owned(), month)
        }
        _ => {
            let month = YearMonth::containing(today);
            (month.to_string(), Some(month))
        }
    };

    let items = match month {
        Some(month) => {
            let connection = state
                .db_connection
                .lock()
                .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
                .map_err(|_| Error::DatabaseLockError)?;

            get_expenses_in_month(month, &connection)
                .inspect_err(|error| tracing::error!("could not get expenses: {error}"))?
        }
        None => Vec::new(),
    };

    let view = ExpensesView {
        month_text,
        month,
        today,
        total: total(&items),
        categories: by_category(&items),
        items,
    };

    Ok(expenses_view(&view).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::{Date, macros::date};

    use crate::{
        db::initialize,
        expense::{Expense, YearMonth, create_expense},
        test_utils::{
            assert_content_type, assert_status_ok, assert_valid_html, parse_html_document,
        },
        timezone::current_local_date,
    };

    use super::{ExpensesPageState, ExpensesQuery, get_expenses_page};

    fn get_test_state() -> ExpensesPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        ExpensesPageState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn insert(state: &ExpensesPageState, amount: i64, category: &str, spent_date: Date) -> Expense {
        let connection = state.db_connection.lock().unwrap();
        create_expense(
            Expense::build(amount, spent_date).category(category),
            &connection,
        )
        .unwrap()
    }

    async fn get_page(state: &ExpensesPageState, month: Option<&str>) -> Html {
        let response = get_expenses_page(
            State(state.clone()),
            Query(ExpensesQuery {
                month: month.map(str::to_owned),
            }),
        )
        .await
        .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    fn expense_ids(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("tr[data-expense-id]").unwrap())
            .filter_map(|row| row.value().attr("data-expense-id").map(str::to_owned))
            .collect()
    }

    fn total_text(html: &Html) -> String {
        html.select(&Selector::parse("p.total").unwrap())
            .next()
            .expect("No total")
            .value()
            .attr("data-total")
            .unwrap_or_default()
            .to_owned()
    }

    #[tokio::test]
    async fn shows_expenses_in_requested_month() {
        let state = get_test_state();
        let lunch = insert(&state, 500, "food", date!(2024 - 03 - 15));
        let train = insert(&state, 1200, "transport", date!(2024 - 03 - 20));
        insert(&state, 900, "food", date!(2024 - 04 - 01));
        insert(&state, 700, "food", date!(2024 - 02 - 29));

        let html = get_page(&state, Some("2024-03")).await;

        assert_eq!(
            expense_ids(&html),
            [train.id.to_string(), lunch.id.to_string()]
        );
        assert_eq!(total_text(&html), "1700");
    }

    #[tokio::test]
    async fn same_day_expenses_show_newest_first() {
        let state = get_test_state();
        let first = insert(&state, 100, "food", date!(2024 - 03 - 15));
        let second = insert(&state, 200, "food", date!(2024 - 03 - 15));

        let html = get_page(&state, Some("2024-03")).await;

        assert_eq!(
            expense_ids(&html),
            [second.id.to_string(), first.id.to_string()]
        );
    }

    #[tokio::test]
    async fn no_month_shows_current_month() {
        let state = get_test_state();
        let today = current_local_date("Etc/UTC").unwrap();
        let this_month = YearMonth::containing(today);
        let current = insert(&state, 500, "food", this_month.first_day());
        if let Some(previous) = this_month.previous() {
            insert(&state, 300, "food", previous.last_day());
        }

        let html = get_page(&state, None).await;

        // The month may have rolled over between inserting and requesting.
        if YearMonth::containing(current_local_date("Etc/UTC").unwrap()) == this_month {
            assert_eq!(expense_ids(&html), [current.id.to_string()]);
        }
    }

    #[tokio::test]
    async fn empty_month_is_treated_as_no_month() {
        let state = get_test_state();

        let html = get_page(&state, Some("")).await;

        let month_input = html
            .select(&Selector::parse("input[name=month]").unwrap())
            .next()
            .expect("No month input");
        let value = month_input.value().attr("value").unwrap_or_default();
        assert!(
            value.parse::<YearMonth>().is_ok(),
            "want current month in month picker, got {value:?}"
        );
    }

    #[tokio::test]
    async fn invalid_month_shows_no_expenses() {
        let state = get_test_state();
        insert(&state, 500, "food", date!(2024 - 03 - 15));

        let html = get_page(&state, Some("March")).await;

        assert!(expense_ids(&html).is_empty());
        assert_eq!(total_text(&html), "0");
        let heading = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(heading, "Expenses for March");
    }
}

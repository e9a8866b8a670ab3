//! Database query for listing the expenses in a month.

use rusqlite::Connection;

use crate::Error;

use super::{
    core::{Expense, map_expense_row},
    month::YearMonth,
};

/// Get the expenses that were spent in `month`.
///
/// Expenses are sorted by date with the most recent first. Expenses on the
/// same day are sorted by ID with the most recently created first.
///
/// # Errors
/// Returns [Error::SqlError] if:
/// - SQL query preparation or execution fails
/// - Expense row mapping fails
pub(crate) fn get_expenses_in_month(
    month: YearMonth,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    // Dates are stored as YYYY-MM-DD text, so the text comparison is also a
    // date comparison.
    connection
        .prepare(
            "SELECT id, spent_date, amount, category, memo FROM expenses \
            WHERE spent_date BETWEEN ?1 AND ?2 \
            ORDER BY spent_date DESC, id DESC",
        )?
        .query_map((month.first_day(), month.last_day()), map_expense_row)?
        .map(|expense_result| expense_result.map_err(Error::SqlError))
        .collect()
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{Expense, YearMonth, create_expense},
    };

    use super::get_expenses_in_month;

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn month(text: &str) -> YearMonth {
        text.parse().unwrap()
    }

    #[test]
    fn only_returns_expenses_in_month() {
        let conn = get_test_connection();
        let dates = [
            date!(2024 - 02 - 29),
            date!(2024 - 03 - 01),
            date!(2024 - 03 - 15),
            date!(2024 - 03 - 31),
            date!(2024 - 04 - 01),
            date!(2023 - 03 - 15),
        ];
        for date in dates {
            create_expense(Expense::build(100, date), &conn).unwrap();
        }

        let got = get_expenses_in_month(month("2024-03"), &conn).unwrap();

        let got_dates: Vec<_> = got.iter().map(|expense| expense.spent_date).collect();
        assert_eq!(
            got_dates,
            vec![
                date!(2024 - 03 - 31),
                date!(2024 - 03 - 15),
                date!(2024 - 03 - 01)
            ]
        );
    }

    #[test]
    fn sorts_by_date_then_id_descending() {
        let conn = get_test_connection();
        let older = create_expense(Expense::build(1, date!(2024 - 03 - 10)), &conn).unwrap();
        let first_same_day =
            create_expense(Expense::build(2, date!(2024 - 03 - 20)), &conn).unwrap();
        let second_same_day =
            create_expense(Expense::build(3, date!(2024 - 03 - 20)), &conn).unwrap();

        let got = get_expenses_in_month(month("2024-03"), &conn).unwrap();

        assert_eq!(got, vec![second_same_day, first_same_day, older]);
    }

    #[test]
    fn empty_month_returns_no_expenses() {
        let conn = get_test_connection();
        create_expense(Expense::build(100, date!(2024 - 03 - 15)), &conn).unwrap();

        let got = get_expenses_in_month(month("2024-05"), &conn).unwrap();

        assert!(got.is_empty());
    }
}

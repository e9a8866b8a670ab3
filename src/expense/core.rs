//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// The category given to expenses that were created without one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Money spent on a given day.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID the database assigned to the expense.
    pub id: ExpenseId,
    /// When the money was spent.
    pub spent_date: Date,
    /// How much was spent, in whole currency units.
    pub amount: i64,
    /// A short label for grouping expenses, e.g. "food".
    pub category: String,
    /// A free text note about the expense.
    pub memo: String,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [NewExpense] for discoverability.
    pub fn build(amount: i64, spent_date: Date) -> NewExpense {
        NewExpense {
            spent_date,
            amount,
            category: DEFAULT_CATEGORY.to_owned(),
            memo: String::new(),
        }
    }
}

/// An expense that has not been saved to the database yet.
///
/// The category defaults to [DEFAULT_CATEGORY] and the memo defaults to an
/// empty string.
///
/// # Examples
///
/// ```
/// use time::macros::date;
///
/// use kakeibo_rs::Expense;
///
/// let expense = Expense::build(500, date!(2024 - 03 - 15))
///     .category("food")
///     .memo("Lunch");
///
/// assert_eq!(expense.category, "food");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// When the money was spent.
    pub spent_date: Date,
    /// How much was spent, in whole currency units.
    pub amount: i64,
    /// A short label for grouping expenses.
    pub category: String,
    /// A free text note about the expense.
    pub memo: String,
}

impl NewExpense {
    /// Set the category, falling back to [DEFAULT_CATEGORY] if `category` is blank.
    ///
    /// A category that is not blank is kept exactly as given.
    pub fn category(mut self, category: &str) -> Self {
        self.category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_owned()
        } else {
            category.to_owned()
        };
        self
    }

    /// Set the memo.
    pub fn memo(mut self, memo: &str) -> Self {
        memo.clone_into(&mut self.memo);
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new expense in the database, the database assigns the ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expenses (spent_date, amount, category, memo)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, spent_date, amount, category, memo",
        )?
        .query_row(
            (
                expense.spent_date,
                expense.amount,
                expense.category,
                expense.memo,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, spent_date, amount, category, memo FROM expenses WHERE id = :id")?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expenses;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

pub(crate) type RowsAffected = usize;

/// Delete the expense with `id`.
///
/// Deleting an expense that does not exist is not an error, zero rows are
/// affected instead.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub(crate) fn delete_expense(
    id: ExpenseId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Create the expense table in the database if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                spent_date TEXT NOT NULL CHECK (length(spent_date) = 10),
                amount INTEGER NOT NULL,
                category TEXT NOT NULL,
                memo TEXT
                )",
        (),
    )?;

    // Used by the monthly listing.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_spent_date ON expenses(spent_date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an [Expense].
///
/// Expects the columns `id, spent_date, amount, category, memo` in that order.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let spent_date = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let memo: Option<String> = row.get(4)?;

    Ok(Expense {
        id,
        spent_date,
        amount,
        category,
        memo: memo.unwrap_or_default(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

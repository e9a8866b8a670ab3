//! Expense management for the household ledger.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `NewExpense` builder for creating expenses
//! - Database functions for storing, querying, and deleting expenses
//! - Monthly totals and per-category breakdowns
//! - Route handlers for the expenses page and its forms

mod core;
mod create_endpoint;
mod delete_endpoint;
mod expenses_page;
mod month;
mod query;
mod summary;
mod view;

pub use core::{
    DEFAULT_CATEGORY, Expense, NewExpense, count_expenses, create_expense, create_expense_table,
    get_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use expenses_page::get_expenses_page;
pub use month::YearMonth;
pub use summary::{CategoryTotal, by_category, total};

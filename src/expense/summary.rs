//! Totals for a list of expenses.

use std::collections::HashMap;

use super::core::Expense;

/// The sum of the expenses in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// The category label.
    pub category: String,
    /// The sum of the amounts of the expenses with this category.
    pub amount: i128,
}

/// The sum of the amounts of `expenses`, zero if there are none.
///
/// Amounts are summed as `i128` so that no list of `i64` amounts can overflow.
pub fn total(expenses: &[Expense]) -> i128 {
    expenses.iter().map(|expense| i128::from(expense.amount)).sum()
}

/// Sum the amounts of `expenses` by category.
///
/// Categories are listed in the order they first appear in `expenses`.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match index_of.get(expense.category.as_str()) {
            Some(&index) => totals[index].amount += i128::from(expense.amount),
            None => {
                index_of.insert(&expense.category, totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: i128::from(expense.amount),
                });
            }
        }
    }

    totals
}

//! Renders the expenses page.

use std::borrow::Cow;

use maud::{Markup, html};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    expense::{CategoryTotal, DEFAULT_CATEGORY, Expense, YearMonth},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_NUMBER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_amount,
    },
    redirect::month_url,
};

/// Memos longer than this many graphemes are cut short in the expense table.
pub(super) const MAX_MEMO_GRAPHEMES: usize = 32;

/// Everything the expenses page shows.
#[derive(Debug, PartialEq)]
pub(super) struct ExpensesView {
    /// The month as requested, echoed back even if it is not a valid month.
    pub month_text: String,
    /// The parsed month, `None` if `month_text` is not a valid month.
    pub month: Option<YearMonth>,
    /// The default date for the create form.
    pub today: Date,
    /// The month's expenses, most recent first.
    pub items: Vec<Expense>,
    /// The sum of the amounts of `items`.
    pub total: i128,
    /// The sum of the amounts of `items` per category.
    pub categories: Vec<CategoryTotal>,
}

pub(super) fn expenses_view(view: &ExpensesView) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Expenses for " (view.month_text) }

            (month_nav(view))

            (create_expense_form(view.today))

            (summary_view(view.total, &view.categories))

            (expense_table(&view.items, &view.month_text))
        }
    );

    base("Expenses", &content)
}

fn month_nav(view: &ExpensesView) -> Markup {
    let previous = view.month.and_then(YearMonth::previous);
    let next = view.month.and_then(YearMonth::next);

    html!(
        nav class="card month-nav" aria-label="Month"
        {
            @if let Some(previous) = previous {
                a href=(month_url(previous)) class=(LINK_STYLE) rel="prev"
                {
                    "← " (previous)
                }
            }

            form method="get" action=(endpoints::ROOT)
            {
                label for="month-picker" class=(FORM_LABEL_STYLE) { "Month" }
                input
                    id="month-picker"
                    type="month"
                    name="month"
                    value=(view.month_text)
                    class=(FORM_TEXT_INPUT_STYLE);
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Show" }
            }

            @if let Some(next) = next {
                a href=(month_url(next)) class=(LINK_STYLE) rel="next"
                {
                    (next) " →"
                }
            }
        }
    )
}

fn create_expense_form(today: Date) -> Markup {
    html!(
        section class="card"
        {
            h2 { "Add Expense" }

            form method="post" action=(endpoints::ADD_EXPENSE) class="form-grid"
            {
                div
                {
                    label for="spent_date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        id="spent_date"
                        type="date"
                        name="spent_date"
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="1"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    input
                        id="category"
                        type="text"
                        name="category"
                        placeholder=(DEFAULT_CATEGORY)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="memo" class=(FORM_LABEL_STYLE) { "Memo" }
                    input
                        id="memo"
                        type="text"
                        name="memo"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                }
            }
        }
    )
}

fn summary_view(total: i128, categories: &[CategoryTotal]) -> Markup {
    html!(
        section class="card" id="summary"
        {
            h2 { "Total" }

            p class="total" data-total=(total) { (format_amount(total)) }

            @if !categories.is_empty() {
                table id="category-totals"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_NUMBER_STYLE) { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for category in categories {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE) { (category.category) }
                                }
                                td class=(TABLE_CELL_NUMBER_STYLE)
                                {
                                    (format_amount(category.amount))
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn expense_table(expenses: &[Expense], month_text: &str) -> Markup {
    let table_row = |expense: &Expense| {
        let memo = truncate_memo(&expense.memo);
        let memo_title = matches!(memo, Cow::Owned(_)).then_some(expense.memo.as_str());
        let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    time datetime=(expense.spent_date) { (expense.spent_date) }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                }

                td class=(TABLE_CELL_NUMBER_STYLE) { (format_amount(expense.amount.into())) }

                td class=(TABLE_CELL_STYLE) title=[memo_title] { (memo) }

                td class=(TABLE_CELL_STYLE)
                {
                    form method="post" action=(delete_url)
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        )
    };

    html!(
        section class="card" id="expenses"
        {
            table
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_NUMBER_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Memo" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for expense in expenses {
                        (table_row(expense))
                    }

                    @if expenses.is_empty() {
                        tr
                        {
                            td colspan="5" class="empty-state"
                            {
                                "No expenses recorded for " (month_text) "."
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Cut `memo` down to [MAX_MEMO_GRAPHEMES] graphemes followed by an ellipsis.
///
/// Short memos are returned as is.
fn truncate_memo(memo: &str) -> Cow<'_, str> {
    let mut graphemes = memo.grapheme_indices(true);

    match graphemes.nth(MAX_MEMO_GRAPHEMES) {
        Some((cut_at, _)) => Cow::Owned(format!("{}…", &memo[..cut_at])),
        None => Cow::Borrowed(memo),
    }
}

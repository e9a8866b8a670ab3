use maud::{DOCTYPE, Markup, PreEscaped, html};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "button-delete";

// Form styles
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "table-header";

pub const TABLE_ROW_STYLE: &str = "table-row";

pub const TABLE_CELL_STYLE: &str = "table-cell";

pub const TABLE_CELL_NUMBER_STYLE: &str = "table-cell number";

// Category badge style
pub const CATEGORY_BADGE_STYLE: &str = "badge";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

const STYLESHEET: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        color: #111827;
        background: #f9fafb;
    }
    .page {
        max-width: 56rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
    }
    .card {
        background: #ffffff;
        border: 1px solid #e5e7eb;
        border-radius: 0.5rem;
        padding: 1rem 1.5rem;
        margin-bottom: 1.5rem;
    }
    .link {
        color: #2563eb;
        text-decoration: underline;
    }
    .form-label {
        display: block;
        margin-bottom: 0.25rem;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .form-input {
        display: block;
        width: 100%;
        box-sizing: border-box;
        padding: 0.5rem;
        border: 1px solid #d1d5db;
        border-radius: 0.25rem;
        background: #f9fafb;
    }
    .form-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 1rem;
        align-items: end;
    }
    .button {
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.25rem;
        cursor: pointer;
    }
    .button-primary {
        color: #ffffff;
        background: #3b82f6;
    }
    .button-delete {
        color: #dc2626;
        background: transparent;
        border: none;
        text-decoration: underline;
        cursor: pointer;
    }
    table {
        width: 100%;
        border-collapse: collapse;
        font-size: 0.875rem;
    }
    .table-header {
        text-transform: uppercase;
        font-size: 0.75rem;
        color: #374151;
        background: #f3f4f6;
    }
    .table-row {
        border-bottom: 1px solid #e5e7eb;
    }
    .table-cell {
        padding: 0.75rem 1rem;
        text-align: left;
    }
    .number {
        text-align: right;
        font-variant-numeric: tabular-nums;
    }
    .badge {
        display: inline-block;
        padding: 0.125rem 0.625rem;
        font-size: 0.75rem;
        font-weight: 600;
        color: #1e40af;
        background: #dbeafe;
        border-radius: 9999px;
    }
    .month-nav {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        align-items: center;
        justify-content: space-between;
    }
    .total {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .empty-state {
        padding: 1rem;
        text-align: center;
        color: #6b7280;
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Kakeibo" }
                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="card"
            {
                h1 { (header) }

                p { strong { (description) } }

                p { (fix) }

                a href="/" class=(LINK_STYLE) { "Back to Homepage" }
            }
        }
    );

    base(title, &content)
}

/// Format a whole number amount with thousands separators, e.g. "-1,234".
///
/// Every digit is kept, however large the amount.
pub fn format_amount(amount: i128) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        formatted.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

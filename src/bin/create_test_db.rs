use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;

use kakeibo_rs::{Expense, YearMonth, create_expense, initialize_db};

/// A utility for creating a test database for the kakeibo_rs web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The month to add sample expenses to as YYYY-MM, defaults to the current month in UTC.
    #[arg(long, short)]
    month: Option<YearMonth>,
}

/// Day of month, amount, category and memo for each sample expense.
const SAMPLE_EXPENSES: [(u8, i64, &str, &str); 8] = [
    (1, 85_000, "rent", "Apartment"),
    (2, 1_280, "food", "Groceries"),
    (3, 540, "transport", "Train pass top up"),
    (5, 3_200, "utilities", "Electricity"),
    (8, 980, "food", "Lunch with coworkers at the ramen place near the station"),
    (12, 2_500, "", ""),
    (15, 1_650, "food", "Groceries"),
    (20, 4_400, "entertainment", "Concert tickets"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let month = args
        .month
        .unwrap_or_else(|| YearMonth::containing(OffsetDateTime::now_utc().date()));

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample expenses for {month}...");

    for (day, amount, category, memo) in SAMPLE_EXPENSES {
        // Every sample day exists in every month.
        let spent_date = month.first_day().replace_day(day)?;

        create_expense(
            Expense::build(amount, spent_date)
                .category(category)
                .memo(memo),
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}

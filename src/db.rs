/*! Sets up the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::expense::create_expense_table;

/// Create the tables for the domain models if they do not exist.
///
/// This is idempotent and should be run once at start up, before serving requests.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

use colored::Colorize;

use crate::db::get_connection;
use crate::error::{DaybookError, Result};
use crate::fmt::money;
use crate::period::{display_name, is_valid_key};
use crate::reports::total_profit;
use crate::settings::db_path;

pub fn run(month: &str) -> Result<()> {
    if !is_valid_key(month) {
        return Err(DaybookError::InvalidMonthKey(month.to_string()));
    }
    let conn = get_connection(&db_path())?;

    // A month with no table and a month with no rows are different
    // answers, and both are printed as such.
    match total_profit(&conn, month)? {
        None => println!("No data recorded for {}.", display_name(month)),
        Some(total) => {
            let formatted = money(total);
            let formatted = if total < 0.0 {
                formatted.red()
            } else {
                formatted.green()
            };
            println!("Total profit for {}: {}", display_name(month), formatted);
        }
    }
    Ok(())
}

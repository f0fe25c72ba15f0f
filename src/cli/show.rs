use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::{DaybookError, Result};
use crate::fmt::money;
use crate::ledger;
use crate::period::{display_name, is_valid_key};
use crate::reports;
use crate::settings::db_path;

pub fn run(month: &str) -> Result<()> {
    if !is_valid_key(month) {
        return Err(DaybookError::InvalidMonthKey(month.to_string()));
    }
    let conn = get_connection(&db_path())?;

    if !ledger::month_table_exists(&conn, month)? {
        println!("No data recorded for {}.", display_name(month));
        return Ok(());
    }

    let entries = ledger::fetch_entries(&conn, month)?;

    let mut table = Table::new();
    table.set_header(vec!["Date", "Revenue", "Expense", "Profit"]);
    for entry in &entries {
        table.add_row(vec![
            Cell::new(entry.date),
            Cell::new(money(entry.revenue)),
            Cell::new(money(entry.expense)),
            Cell::new(money(entry.profit())),
        ]);
    }
    println!("{}\n{table}", display_name(month).bold());

    if let Some(totals) = reports::month_totals(&conn, month)? {
        let profit = money(totals.profit);
        let profit = if totals.profit < 0.0 {
            profit.red()
        } else {
            profit.green()
        };
        println!(
            "Totals: revenue {}, expense {}, profit {}",
            money(totals.revenue),
            money(totals.expense),
            profit
        );
    }
    Ok(())
}

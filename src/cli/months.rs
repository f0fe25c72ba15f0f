use comfy_table::{Cell, Table};

use crate::catalog::list_months;
use crate::db::get_connection;
use crate::error::Result;
use crate::settings::db_path;

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let months = list_months(&conn)?;

    if months.is_empty() {
        println!("No months recorded yet. Use `daybook add` to record a day.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Month"]);
    for month in months {
        table.add_row(vec![Cell::new(month.key), Cell::new(month.display_name)]);
    }
    println!("Recorded months\n{table}");
    Ok(())
}

use rusqlite::Connection;

use crate::db::table_exists;
use crate::error::Result;
use crate::period::is_valid_key;

/// Aggregate totals for one month.
pub struct MonthTotals {
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
}

/// Total profit of a month.
///
/// `None` means the month has no table at all; `Some(0.0)` means the
/// table exists but holds no entries. Callers must not collapse the two:
/// "never recorded" and "recorded nothing" are different answers.
pub fn total_profit(conn: &Connection, key: &str) -> Result<Option<f64>> {
    if !is_valid_key(key) || !table_exists(conn, key)? {
        return Ok(None);
    }
    let sql = format!("SELECT COALESCE(SUM(profit), 0) FROM {key}");
    let total: f64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(Some(total))
}

/// Revenue, expense and profit totals for a month, with the same
/// missing-vs-empty semantics as `total_profit`.
pub fn month_totals(conn: &Connection, key: &str) -> Result<Option<MonthTotals>> {
    if !is_valid_key(key) || !table_exists(conn, key)? {
        return Ok(None);
    }
    let sql = format!(
        "SELECT COALESCE(SUM(revenue), 0), COALESCE(SUM(expense), 0), COALESCE(SUM(profit), 0)
         FROM {key}"
    );
    let totals = conn.query_row(&sql, [], |row| {
        Ok(MonthTotals {
            revenue: row.get(0)?,
            expense: row.get(1)?,
            profit: row.get(2)?,
        })
    })?;
    Ok(Some(totals))
}

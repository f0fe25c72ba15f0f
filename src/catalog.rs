use rusqlite::Connection;

use crate::error::Result;
use crate::models::MonthListing;
use crate::period::{display_name, is_valid_key, parse_key};

/// Every month that currently has a ledger table, in chronological order.
///
/// Only table names matching the month-key pattern are considered, so
/// fixed tables sharing the database (users) never show up. A matching
/// name that still fails to parse as a month sorts last and keeps its
/// raw key as the display name.
pub fn list_months(conn: &Connection) -> Result<Vec<MonthListing>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
    )?;
    let names = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut months: Vec<MonthListing> = names
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|name| is_valid_key(name))
        .map(|key| MonthListing {
            display_name: display_name(&key),
            key,
        })
        .collect();

    months.sort_by_key(|m| match parse_key(&m.key) {
        Some((month, year)) => (year, month, String::new()),
        None => (i32::MAX, u32::MAX, m.key.clone()),
    });
    Ok(months)
}

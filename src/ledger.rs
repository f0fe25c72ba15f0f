use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::table_exists;
use crate::error::{DaybookError, Result};
use crate::models::DailyEntry;
use crate::period::{is_valid_key, month_key};

/// Create the month table for this date if it does not exist yet.
///
/// A single CREATE statement, so provisioning is all-or-nothing: the
/// table either exists with the full schema or not at all. Calling this
/// for an existing month is a no-op. Profit is a generated column; the
/// stored value can never drift from `revenue - expense`.
pub fn ensure_month_table(conn: &Connection, date: NaiveDate) -> Result<()> {
    let table = month_key(date);
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY,
            entry_date TEXT NOT NULL UNIQUE,
            revenue REAL NOT NULL,
            expense REAL NOT NULL,
            profit REAL GENERATED ALWAYS AS (revenue - expense) STORED
        )"
    );
    conn.execute(&sql, [])?;
    Ok(())
}

fn validate_amounts(entry: &DailyEntry) -> Result<()> {
    for (label, value) in [("revenue", entry.revenue), ("expense", entry.expense)] {
        if !value.is_finite() {
            return Err(DaybookError::InvalidAmount(format!(
                "{label} must be a finite number"
            )));
        }
        if value < 0.0 {
            return Err(DaybookError::InvalidAmount(format!(
                "{label} must not be negative"
            )));
        }
    }
    Ok(())
}

/// Insert the entry, or replace the amounts of the existing row for the
/// same date. This is the single write path for both "record a new day"
/// and "correct a recorded day"; whether a day must already exist is the
/// caller's concern (see `update_entry`).
pub fn upsert_entry(conn: &Connection, entry: &DailyEntry) -> Result<()> {
    validate_amounts(entry)?;
    ensure_month_table(conn, entry.date)?;
    let table = month_key(entry.date);
    let sql = format!(
        "INSERT INTO {table} (entry_date, revenue, expense) VALUES (?1, ?2, ?3)
         ON CONFLICT(entry_date) DO UPDATE SET
             revenue = excluded.revenue,
             expense = excluded.expense"
    );
    conn.execute(
        &sql,
        rusqlite::params![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.revenue,
            entry.expense
        ],
    )?;
    Ok(())
}

/// Replace the amounts for `entry.date` in the named month table, only
/// if a row for that date already exists. Returns whether a row changed.
/// Never creates a table or a row.
pub fn update_entry(conn: &Connection, entry: &DailyEntry, key: &str) -> Result<bool> {
    validate_amounts(entry)?;
    if !is_valid_key(key) || !table_exists(conn, key)? {
        return Ok(false);
    }
    let sql = format!("UPDATE {key} SET revenue = ?1, expense = ?2 WHERE entry_date = ?3");
    let changed = conn.execute(
        &sql,
        rusqlite::params![
            entry.revenue,
            entry.expense,
            entry.date.format("%Y-%m-%d").to_string()
        ],
    )?;
    Ok(changed > 0)
}

/// All entries of a month, ordered by date ascending. A month with no
/// table yields an empty vec: "no data" is not an error here, and callers
/// that care can ask `month_table_exists`. Storage failures still
/// propagate as errors.
pub fn fetch_entries(conn: &Connection, key: &str) -> Result<Vec<DailyEntry>> {
    if !is_valid_key(key) || !table_exists(conn, key)? {
        return Ok(Vec::new());
    }
    // Dates are stored ISO-8601, so lexical order is date order.
    let sql = format!("SELECT entry_date, revenue, expense FROM {key} ORDER BY entry_date ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        let date_str: String = row.get(0)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(DailyEntry {
            date,
            revenue: row.get(1)?,
            expense: row.get(2)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

pub fn month_table_exists(conn: &Connection, key: &str) -> Result<bool> {
    if !is_valid_key(key) {
        return Ok(false);
    }
    table_exists(conn, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ensure_month_table_is_idempotent() {
        let (_dir, conn) = test_db();
        ensure_month_table(&conn, date(2025, 6, 1)).unwrap();
        ensure_month_table(&conn, date(2025, 6, 15)).unwrap();
        assert!(month_table_exists(&conn, "june_25").unwrap());
    }

    #[test]
    fn test_upsert_inserts_new_row() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 100.0, 40.0)).unwrap();
        let entries = fetch_entries(&conn, "june_25").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].revenue, 100.0);
        assert_eq!(entries[0].expense, 40.0);
    }

    #[test]
    fn test_upsert_replaces_existing_row() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 100.0, 40.0)).unwrap();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 200.0, 50.0)).unwrap();

        let entries = fetch_entries(&conn, "june_25").unwrap();
        assert_eq!(entries.len(), 1, "one row per date, not two");
        assert_eq!(entries[0].revenue, 200.0);
        assert_eq!(entries[0].expense, 50.0);
        assert_eq!(entries[0].profit(), 150.0);
    }

    #[test]
    fn test_stored_profit_matches_computed() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 3, 10), 500.00, 120.50)).unwrap();
        let stored: f64 = conn
            .query_row(
                "SELECT profit FROM march_25 WHERE entry_date = '2025-03-10'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        let computed = fetch_entries(&conn, "march_25").unwrap()[0].profit();
        assert_eq!(stored, computed);
        assert_eq!(stored, 379.50);
    }

    #[test]
    fn test_update_existing_row_returns_true() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 100.0, 40.0)).unwrap();
        let changed =
            update_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 300.0, 10.0), "june_25")
                .unwrap();
        assert!(changed);
        let entries = fetch_entries(&conn, "june_25").unwrap();
        assert_eq!(entries[0].revenue, 300.0);
    }

    #[test]
    fn test_update_missing_row_returns_false() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 100.0, 40.0)).unwrap();
        let changed =
            update_entry(&conn, &DailyEntry::new(date(2025, 6, 2), 300.0, 10.0), "june_25")
                .unwrap();
        assert!(!changed);
        assert_eq!(fetch_entries(&conn, "june_25").unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_table_returns_false() {
        let (_dir, conn) = test_db();
        let changed =
            update_entry(&conn, &DailyEntry::new(date(2025, 6, 1), 300.0, 10.0), "june_25")
                .unwrap();
        assert!(!changed);
        assert!(!month_table_exists(&conn, "june_25").unwrap());
    }

    #[test]
    fn test_fetch_entries_sorted_by_date() {
        let (_dir, conn) = test_db();
        for day in [15, 1, 30] {
            upsert_entry(&conn, &DailyEntry::new(date(2025, 6, day), 10.0, 5.0)).unwrap();
        }
        let dates: Vec<u32> = fetch_entries(&conn, "june_25")
            .unwrap()
            .iter()
            .map(|e| chrono::Datelike::day(&e.date))
            .collect();
        assert_eq!(dates, vec![1, 15, 30]);
    }

    #[test]
    fn test_fetch_entries_missing_table_is_empty() {
        let (_dir, conn) = test_db();
        assert!(fetch_entries(&conn, "june_25").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_entries_invalid_key_is_empty() {
        let (_dir, conn) = test_db();
        assert!(fetch_entries(&conn, "users").unwrap().is_empty());
        assert!(fetch_entries(&conn, "june_25; DROP TABLE users").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let (_dir, conn) = test_db();
        let err = upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), -5.0, 0.0));
        assert!(matches!(err, Err(DaybookError::InvalidAmount(_))));
        assert!(!month_table_exists(&conn, "june_25").unwrap());
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        let (_dir, conn) = test_db();
        let err = upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 1), f64::NAN, 0.0));
        assert!(matches!(err, Err(DaybookError::InvalidAmount(_))));
        let err = update_entry(
            &conn,
            &DailyEntry::new(date(2025, 6, 1), 1.0, f64::INFINITY),
            "june_25",
        );
        assert!(matches!(err, Err(DaybookError::InvalidAmount(_))));
    }

    #[test]
    fn test_entries_kept_per_month() {
        let (_dir, conn) = test_db();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 6, 30), 10.0, 0.0)).unwrap();
        upsert_entry(&conn, &DailyEntry::new(date(2025, 7, 1), 20.0, 0.0)).unwrap();
        assert_eq!(fetch_entries(&conn, "june_25").unwrap().len(), 1);
        assert_eq!(fetch_entries(&conn, "july_25").unwrap().len(), 1);
    }
}

use crate::cli::{parse_amount, parse_date};
use crate::db::get_connection;
use crate::error::{DaybookError, Result};
use crate::fmt::money;
use crate::ledger;
use crate::models::DailyEntry;
use crate::period::{display_name, is_valid_key, month_key};
use crate::settings::db_path;

pub fn add(date: &str, revenue: &str, expense: &str) -> Result<()> {
    let entry = DailyEntry::new(parse_date(date)?, parse_amount(revenue)?, parse_amount(expense)?);

    let conn = get_connection(&db_path())?;
    ledger::upsert_entry(&conn, &entry)?;

    println!(
        "Recorded {}: revenue {}, expense {}, profit {}",
        entry.date,
        money(entry.revenue),
        money(entry.expense),
        money(entry.profit())
    );
    Ok(())
}

pub fn update(date: &str, revenue: &str, expense: &str, month: Option<&str>) -> Result<()> {
    let entry = DailyEntry::new(parse_date(date)?, parse_amount(revenue)?, parse_amount(expense)?);
    let key = match month {
        Some(k) if !is_valid_key(k) => {
            return Err(DaybookError::InvalidMonthKey(k.to_string()));
        }
        Some(k) => k.to_string(),
        None => month_key(entry.date),
    };

    let conn = get_connection(&db_path())?;
    if ledger::update_entry(&conn, &entry, &key)? {
        println!(
            "Updated {} in {}: revenue {}, expense {}",
            entry.date,
            display_name(&key),
            money(entry.revenue),
            money(entry.expense)
        );
    } else {
        println!(
            "No entry for {} in {}. Use `daybook add` to record it first.",
            entry.date,
            display_name(&key)
        );
    }
    Ok(())
}

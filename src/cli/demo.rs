use chrono::{Datelike, Local, NaiveDate};

use crate::db::get_connection;
use crate::error::Result;
use crate::ledger::upsert_entry;
use crate::models::DailyEntry;
use crate::settings::db_path;

struct DemoDay {
    day: u32,
    revenue: f64,
    expense: f64,
}

/// One month of shop activity; reused across the seeded months with a
/// small index-based variation so the months don't look identical.
const DAYS: &[DemoDay] = &[
    DemoDay { day: 1, revenue: 420.00, expense: 180.50 },
    DemoDay { day: 3, revenue: 385.25, expense: 92.00 },
    DemoDay { day: 5, revenue: 510.75, expense: 240.10 },
    DemoDay { day: 8, revenue: 298.00, expense: 75.40 },
    DemoDay { day: 12, revenue: 615.50, expense: 310.00 },
    DemoDay { day: 15, revenue: 450.00, expense: 520.00 },
    DemoDay { day: 19, revenue: 530.30, expense: 145.75 },
    DemoDay { day: 22, revenue: 395.80, expense: 88.20 },
    DemoDay { day: 26, revenue: 470.00, expense: 199.99 },
    DemoDay { day: 28, revenue: 620.45, expense: 260.00 },
];

/// Clamp a day to the last valid day of the given month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let next_month = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap());
    day.min(next_month.pred_opt().unwrap().day())
}

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let today = Local::now().date_naive();

    let mut count = 0;
    for months_ago in (0..3u32).rev() {
        let target = today - chrono::Months::new(months_ago);
        // +/- a few percent per month so totals differ month to month
        let vary = 1.0 + (months_ago as f64 - 1.0) * 0.04;

        for sample in DAYS {
            let day = clamp_day(target.year(), target.month(), sample.day);
            let date = NaiveDate::from_ymd_opt(target.year(), target.month(), day).unwrap();
            let entry = DailyEntry::new(
                date,
                (sample.revenue * vary * 100.0).round() / 100.0,
                (sample.expense * vary * 100.0).round() / 100.0,
            );
            upsert_entry(&conn, &entry)?;
            count += 1;
        }
    }

    println!("Seeded {count} sample entries across 3 months. Try `daybook months`.");
    Ok(())
}

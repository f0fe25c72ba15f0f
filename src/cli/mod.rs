pub mod demo;
pub mod entry;
pub mod init;
pub mod months;
pub mod show;
pub mod status;
pub mod total;
pub mod user;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{DaybookError, Result};

/// Parse a user-supplied date, YYYY-MM-DD.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DaybookError::InvalidDate(format!("expected YYYY-MM-DD, got '{s}'")))
}

/// Parse a user-supplied amount. Comma and dot are both accepted as the
/// decimal separator; the storage layer only ever sees the parsed value.
pub(crate) fn parse_amount(s: &str) -> Result<f64> {
    let normalized = s.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| DaybookError::InvalidAmount(format!("'{s}' is not a number")))?;
    if !value.is_finite() {
        return Err(DaybookError::InvalidAmount(format!("'{s}' is not finite")));
    }
    Ok(value)
}

#[derive(Parser)]
#[command(name = "daybook", about = "Daily revenue/expense ledger, one table per month.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up daybook: choose a data directory and initialize the database.
    Init {
        /// Path for daybook data (default: ~/Documents/daybook)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a day, replacing any existing entry for the same date.
    Add {
        /// Entry date: YYYY-MM-DD
        date: String,
        /// Revenue for the day
        #[arg(allow_hyphen_values = true)]
        revenue: String,
        /// Expense for the day
        #[arg(allow_hyphen_values = true)]
        expense: String,
    },
    /// Correct an already-recorded day; fails softly if the day is missing.
    Update {
        /// Entry date: YYYY-MM-DD
        date: String,
        /// Revenue for the day
        #[arg(allow_hyphen_values = true)]
        revenue: String,
        /// Expense for the day
        #[arg(allow_hyphen_values = true)]
        expense: String,
        /// Month table to update (default: the date's own month, e.g. june_25)
        #[arg(long)]
        month: Option<String>,
    },
    /// Show all entries of a month with totals.
    Show {
        /// Month key, e.g. june_25
        month: String,
    },
    /// Show the total profit of a month.
    Total {
        /// Month key, e.g. june_25
        month: String,
    },
    /// List months that have data.
    Months,
    /// Manage login users.
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Load a few months of sample entries to explore daybook.
    Demo,
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Add a login user (prompts for a password).
    Add {
        /// Username
        name: String,
    },
    /// Check a username/password pair (prompts for the password).
    Check {
        /// Username
        name: String,
    },
}

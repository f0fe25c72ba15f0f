use crate::catalog::list_months;
use crate::db::get_connection;
use crate::error::Result;
use crate::ledger::fetch_entries;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("daybook.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {size} bytes");

        let conn = get_connection(&db_path)?;
        let months = list_months(&conn)?;
        let mut entries = 0usize;
        for month in &months {
            entries += fetch_entries(&conn, &month.key)?.len();
        }
        let users: i64 = conn.query_row("SELECT count(*) FROM users", [], |r| r.get(0))?;

        println!();
        println!("Months:   {}", months.len());
        println!("Entries:  {entries}");
        println!("Users:    {users}");
    } else {
        println!();
        println!("Database not found. Run `daybook init` to set up.");
    }

    Ok(())
}

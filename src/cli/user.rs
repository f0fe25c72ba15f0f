use crate::auth;
use crate::db::get_connection;
use crate::error::{DaybookError, Result};
use crate::settings::db_path;

pub fn add(name: &str) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| DaybookError::Other(format!("could not read password: {e}")))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| DaybookError::Other(format!("could not read password: {e}")))?;
    if password != confirm {
        return Err(DaybookError::Other("passwords do not match".to_string()));
    }

    let conn = get_connection(&db_path())?;
    if auth::add_user(&conn, name, &password)? {
        println!("Added user: {name}");
    } else {
        println!("User '{name}' already exists.");
    }
    Ok(())
}

pub fn check(name: &str) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| DaybookError::Other(format!("could not read password: {e}")))?;

    let conn = get_connection(&db_path())?;
    if auth::validate_user(&conn, name, &password)? {
        println!("Credentials valid.");
    } else {
        println!("Invalid username or password.");
    }
    Ok(())
}

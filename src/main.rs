mod auth;
mod catalog;
mod cli;
mod db;
mod error;
mod fmt;
mod ledger;
mod models;
mod period;
mod reports;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, UserCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            date,
            revenue,
            expense,
        } => cli::entry::add(&date, &revenue, &expense),
        Commands::Update {
            date,
            revenue,
            expense,
            month,
        } => cli::entry::update(&date, &revenue, &expense, month.as_deref()),
        Commands::Show { month } => cli::show::run(&month),
        Commands::Total { month } => cli::total::run(&month),
        Commands::Months => cli::months::run(),
        Commands::User { command } => match command {
            UserCommands::Add { name } => cli::user::add(&name),
            UserCommands::Check { name } => cli::user::check(&name),
        },
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

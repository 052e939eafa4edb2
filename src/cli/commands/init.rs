use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    // The database actually used: the CLI override wins over the config file,
    // exactly like in the main dispatcher.
    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => Config::load().database,
    };

    println!("⚙️  Initializing carelog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;

    // Tables + migrations
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Internal log (non-blocking)
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 carelog initialization completed!");
    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::identity::Identity;
use crate::models::shift::Shift;
use crate::store::csv::CsvTable;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the identity table (users.csv) with its header row
///  - the shift ledger (shifts.csv) with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        cfg.save()?;
        println!("📄 Config file : {}", Config::config_file().display());
    }

    println!("🗂️  Data dir    : {}", cfg.data_dir);

    let users: CsvTable<Identity> = CsvTable::new(cfg.users_path());
    users.ensure_exists()?;
    println!("👤 Users file  : {}", users.path().display());

    let shifts: CsvTable<Shift> = CsvTable::new(cfg.ledger_path());
    shifts.ensure_exists()?;
    println!("🕐 Ledger file : {}", shifts.path().display());

    messages::success("shiftlog initialization completed!");
    Ok(())
}

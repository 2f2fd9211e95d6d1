pub mod cancel;
pub mod clock_in;
pub mod clock_out;
pub mod init;
pub mod register;
pub mod start;

use crate::bot::router::Router;
use crate::config::Config;
use crate::core::identity::IdentityBook;
use crate::core::ledger::ShiftLedger;
use crate::models::identity::Identity;
use crate::models::shift::Shift;
use crate::store::csv::CsvTable;

/// Wire a router over the CSV tables configured in `cfg`.
pub fn router(cfg: &Config) -> Router<CsvTable<Identity>, CsvTable<Shift>> {
    let identities = IdentityBook::new(CsvTable::new(cfg.users_path()));
    let ledger = ShiftLedger::new(CsvTable::new(cfg.ledger_path()));
    Router::new(identities, ledger)
}

//! Row-store abstraction shared by the identity table and the shift ledger.
//!
//! Both components follow the same contract: every operation loads the full
//! table, works on it in memory, and writes the full table back. There is no
//! partial update and no cache. The CSV table is the production backend; the
//! in-memory table backs unit tests without touching the filesystem.

pub mod csv;
pub mod mem;

use crate::errors::AppResult;

/// A record that maps to one row of a headered table.
pub trait Row: Clone {
    /// Header row written when the table file is first created.
    const HEADER: &'static [&'static str];

    fn to_cells(&self) -> Vec<String>;

    /// Build a record from raw cells. Missing cells read as empty; parsing
    /// of cell contents is deferred to whoever needs the value.
    fn from_cells(cells: &[String]) -> Self;
}

/// Full-state storage: `load` the complete table, `save` the complete table.
pub trait Table<R: Row> {
    fn load(&self) -> AppResult<Vec<R>>;
    fn save(&self, rows: &[R]) -> AppResult<()>;
}

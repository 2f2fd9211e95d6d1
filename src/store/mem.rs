//! In-process table with the same full read/rewrite contract as the CSV
//! backend. Clones share the underlying rows, so a test can keep a handle
//! and inspect what the component under test persisted.

use crate::errors::{AppError, AppResult};
use crate::store::{Row, Table};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
pub struct MemTable<R: Row> {
    rows: Rc<RefCell<Vec<R>>>,
    poisoned: Rc<Cell<bool>>,
}

impl<R: Row> MemTable<R> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: Rc::new(RefCell::new(rows)),
            poisoned: Rc::new(Cell::new(false)),
        }
    }

    /// Snapshot of the currently persisted rows.
    pub fn rows(&self) -> Vec<R> {
        self.rows.borrow().clone()
    }

    /// Make every subsequent load and save fail, to exercise the storage
    /// error paths without an actual broken file.
    pub fn poison(&self) {
        self.poisoned.set(true);
    }

    fn check(&self) -> AppResult<()> {
        if self.poisoned.get() {
            Err(AppError::Storage("table is unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl<R: Row> Default for MemTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Row> Table<R> for MemTable<R> {
    fn load(&self) -> AppResult<Vec<R>> {
        self.check()?;
        Ok(self.rows.borrow().clone())
    }

    fn save(&self, rows: &[R]) -> AppResult<()> {
        self.check()?;
        *self.rows.borrow_mut() = rows.to_vec();
        Ok(())
    }
}

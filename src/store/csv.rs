//! CSV-backed table. The file is created with exactly its header row on
//! demand, and rewritten in full on every save.

use crate::errors::AppResult;
use crate::store::{Row, Table};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub struct CsvTable<R: Row> {
    path: PathBuf,
    _row: PhantomData<R>,
}

impl<R: Row> CsvTable<R> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _row: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with the header row and zero data rows if missing.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(R::HEADER)?;
        wtr.flush()?;
        Ok(())
    }
}

impl<R: Row> Table<R> for CsvTable<R> {
    fn load(&self) -> AppResult<Vec<R>> {
        self.ensure_exists()?;
        // flexible: short rows in a hand-edited file read as empty cells
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let cells: Vec<String> = rec.iter().map(str::to_string).collect();
            rows.push(R::from_cells(&cells));
        }
        Ok(rows)
    }

    fn save(&self, rows: &[R]) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(R::HEADER)?;
        for row in rows {
            wtr.write_record(row.to_cells())?;
        }
        wtr.flush()?;
        Ok(())
    }
}

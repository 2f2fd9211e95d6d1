//! Shift ledger: append-only shift rows plus the clock-out reconciliation.

use crate::errors::{AppError, AppResult};
use crate::models::shift::{Shift, ShiftStatus};
use crate::store::Table;
use crate::utils::time;
use chrono::{NaiveDate, NaiveTime};

/// Outcome of a successful clock-out, already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub user: String,
    pub clock_out: String,
    pub worked: String,
}

pub struct ShiftLedger<S: Table<Shift>> {
    table: S,
}

impl<S: Table<Shift>> ShiftLedger<S> {
    pub fn new(table: S) -> Self {
        Self { table }
    }

    /// Append a new open shift for `user` and persist the ledger.
    ///
    /// There is deliberately no check for an already-open shift: two
    /// clock-ins in a row leave two open rows, and only the later one is
    /// reachable by a clock-out. The earlier stays open indefinitely.
    pub fn clock_in(&self, user: &str, at: NaiveTime, on: NaiveDate) -> AppResult<()> {
        let mut rows = self.table.load()?;
        rows.push(Shift::open(
            user,
            &time::format_date(on),
            &time::format_time(at),
        ));
        self.table.save(&rows)
    }

    /// Close the most recently appended open shift for `user`.
    ///
    /// Recency is row position, not clock-in timestamp: if rows were ever
    /// appended out of order, the highest-position open row still wins.
    /// Nothing is written unless the close fully succeeds.
    pub fn clock_out(&self, user: &str, at: NaiveTime, on: NaiveDate) -> AppResult<ClockOut> {
        let mut rows = self.table.load()?;

        let idx = rows
            .iter()
            .rposition(|r| r.user == user && r.is_open())
            .ok_or_else(|| AppError::NoOpenShift(user.to_string()))?;

        let row = &rows[idx];
        let started = time::combine(&row.clock_in, &row.date).ok_or_else(|| {
            AppError::MalformedTimestamp(format!("{} {}", row.clock_in, row.date))
        })?;
        let ended = on.and_time(at);

        // May be negative when the clock-out lands before the clock-in in
        // wall-clock terms (overnight shift without a date rollover). Kept
        // as-is rather than compensated.
        let worked = time::format_duration(ended - started);
        let clock_out = time::format_time(at);

        rows[idx].status = ShiftStatus::Closed {
            clock_out: clock_out.clone(),
            worked: worked.clone(),
        };
        self.table.save(&rows)?;

        Ok(ClockOut {
            user: user.to_string(),
            clock_out,
            worked,
        })
    }
}

use crate::store::Row;

/// Whether a shift is still running or has been reconciled with a clock-out.
///
/// Open vs closed is a first-class variant here rather than an "is the cell
/// empty" artifact of scanning the file, so the duplicate-clock-in case
/// (several open rows for one user) is a state tests can name directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftStatus {
    Open,
    Closed { clock_out: String, worked: String },
}

/// One row of the shift ledger.
///
/// `date` ("DD/MM/YYYY") and `clock_in` ("HH:MM") stay as the raw cell text:
/// a malformed cell must load fine and only fail when a clock-out actually
/// needs to parse it. Row order in the ledger is the sole recency index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub user: String,
    pub date: String,
    pub clock_in: String,
    pub status: ShiftStatus,
}

impl Shift {
    /// A freshly clocked-in shift, not yet reconciled.
    pub fn open(user: &str, date: &str, clock_in: &str) -> Self {
        Self {
            user: user.to_string(),
            date: date.to_string(),
            clock_in: clock_in.to_string(),
            status: ShiftStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.status, ShiftStatus::Open)
    }
}

impl Row for Shift {
    const HEADER: &'static [&'static str] =
        &["user", "date", "clock_in", "clock_out", "worked_duration"];

    fn to_cells(&self) -> Vec<String> {
        let (clock_out, worked) = match &self.status {
            ShiftStatus::Open => (String::new(), String::new()),
            ShiftStatus::Closed { clock_out, worked } => (clock_out.clone(), worked.clone()),
        };
        vec![
            self.user.clone(),
            self.date.clone(),
            self.clock_in.clone(),
            clock_out,
            worked,
        ]
    }

    fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        // An absent worked_duration is what makes a row eligible for closing.
        let status = if cell(4).is_empty() {
            ShiftStatus::Open
        } else {
            ShiftStatus::Closed {
                clock_out: cell(3),
                worked: cell(4),
            }
        };
        Self {
            user: cell(0),
            date: cell(1),
            clock_in: cell(2),
            status,
        }
    }
}

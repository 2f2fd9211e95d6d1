use crate::store::Row;

/// One registered user: opaque transport identifier plus display name.
/// The id is kept as text so numeric and string identifiers compare the
/// same way once they have been through the table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub name: String,
}

impl Identity {
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
        }
    }
}

impl Row for Identity {
    const HEADER: &'static [&'static str] = &["user_id", "name"];

    fn to_cells(&self) -> Vec<String> {
        vec![self.user_id.clone(), self.name.clone()]
    }

    fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            user_id: cell(0),
            name: cell(1),
        }
    }
}

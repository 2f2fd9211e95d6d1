//! Identity store: opaque user id to registered display name.

use crate::errors::AppResult;
use crate::models::identity::Identity;
use crate::store::Table;

/// Lookup/upsert over the identity table. Holds no state of its own: every
/// call loads the full table and, when mutating, writes it back whole.
pub struct IdentityBook<S: Table<Identity>> {
    table: S,
}

impl<S: Table<Identity>> IdentityBook<S> {
    pub fn new(table: S) -> Self {
        Self { table }
    }

    /// The name registered for `user_id`, if any. Linear scan, first match
    /// wins.
    pub fn lookup(&self, user_id: &str) -> AppResult<Option<String>> {
        let rows = self.table.load()?;
        Ok(rows
            .into_iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.name))
    }

    /// Register or overwrite the display name for `user_id`.
    /// The name is stored as-is; an empty string is a valid name.
    pub fn upsert(&self, user_id: &str, name: &str) -> AppResult<()> {
        let mut rows = self.table.load()?;
        match rows.iter_mut().find(|r| r.user_id == user_id) {
            Some(row) => row.name = name.to_string(),
            None => rows.push(Identity::new(user_id, name)),
        }
        self.table.save(&rows)
    }
}

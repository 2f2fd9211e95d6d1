//! Command routing: the boundary where every failure becomes a
//! human-readable reply instead of a process crash.

use crate::bot::dialogue::{DialogueState, Dialogues};
use crate::core::identity::IdentityBook;
use crate::core::ledger::ShiftLedger;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::shift::Shift;
use crate::store::Table;
use crate::utils::time;
use chrono::{NaiveDate, NaiveTime};

/// An inbound chat event: either a command or a free-text message.
/// Clock events carry the moment the transport received them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Register,
    ClockIn { at: NaiveTime, on: NaiveDate },
    ClockOut { at: NaiveTime, on: NaiveDate },
    Cancel,
    Text(String),
}

impl Event {
    /// Classify a raw free-text line from an open dialogue.
    pub fn from_message(line: &str) -> Self {
        if line.trim() == "/cancel" {
            Event::Cancel
        } else {
            Event::Text(line.to_string())
        }
    }
}

pub const USAGE: &str = "Welcome to the time attendance tracker!\n\
Use `register` to store your full name if this is your first time.\n\
Then use `clock-in` to record your arrival and `clock-out` to record your departure.";

/// Routes events from one transport session to the two stores.
pub struct Router<I: Table<Identity>, L: Table<Shift>> {
    identities: IdentityBook<I>,
    ledger: ShiftLedger<L>,
    dialogues: Dialogues,
}

impl<I: Table<Identity>, L: Table<Shift>> Router<I, L> {
    pub fn new(identities: IdentityBook<I>, ledger: ShiftLedger<L>) -> Self {
        Self {
            identities,
            ledger,
            dialogues: Dialogues::new(),
        }
    }

    pub fn state(&self, user_id: &str) -> DialogueState {
        self.dialogues.state(user_id)
    }

    /// Handle one inbound event for `user_id` and produce the reply text.
    /// Store and parse failures are folded into the reply here; nothing
    /// escapes to the caller.
    pub fn handle(&mut self, user_id: &str, event: Event) -> String {
        match self.dispatch(user_id, event) {
            Ok(reply) => reply,
            Err(e) => report(&e),
        }
    }

    fn dispatch(&mut self, user_id: &str, event: Event) -> AppResult<String> {
        match event {
            Event::Start => Ok(USAGE.to_string()),
            Event::Register => self.register(user_id),
            Event::Cancel => Ok(self.cancel(user_id)),
            Event::Text(text) => self.text(user_id, &text),
            Event::ClockIn { at, on } => self.clock_in(user_id, at, on),
            Event::ClockOut { at, on } => self.clock_out(user_id, at, on),
        }
    }

    fn register(&mut self, user_id: &str) -> AppResult<String> {
        if let Some(name) = self.identities.lookup(user_id)? {
            // Already registered: short-circuit, no dialogue.
            return Ok(format!(
                "You are already registered as {}. Use `clock-in` to record your arrival.",
                name
            ));
        }
        self.dialogues.await_name(user_id);
        Ok("Looks like this is your first time here. Please send your full name:".to_string())
    }

    fn text(&mut self, user_id: &str, text: &str) -> AppResult<String> {
        match self.dialogues.state(user_id) {
            DialogueState::AwaitingName => {
                self.identities.upsert(user_id, text)?;
                self.dialogues.reset(user_id);
                Ok(format!(
                    "Thanks, {}! You can now record your arrival with `clock-in`.",
                    text
                ))
            }
            DialogueState::Idle => {
                Ok("Nothing pending. Use `start` to see the available commands.".to_string())
            }
        }
    }

    fn cancel(&mut self, user_id: &str) -> String {
        match self.dialogues.state(user_id) {
            DialogueState::AwaitingName => {
                self.dialogues.reset(user_id);
                "The operation has been cancelled.".to_string()
            }
            DialogueState::Idle => "Nothing to cancel.".to_string(),
        }
    }

    fn clock_in(&mut self, user_id: &str, at: NaiveTime, on: NaiveDate) -> AppResult<String> {
        let name = self.registered(user_id)?;
        self.ledger.clock_in(&name, at, on)?;
        Ok(format!(
            "Clock-in recorded for {} at {} on {}!",
            name,
            time::format_time(at),
            time::format_date(on)
        ))
    }

    fn clock_out(&mut self, user_id: &str, at: NaiveTime, on: NaiveDate) -> AppResult<String> {
        let name = self.registered(user_id)?;
        let closed = self.ledger.clock_out(&name, at, on)?;
        Ok(format!(
            "Clock-out recorded for {} at {} on {}. Worked: {}.",
            closed.user,
            closed.clock_out,
            time::format_date(on),
            closed.worked
        ))
    }

    fn registered(&self, user_id: &str) -> AppResult<String> {
        self.identities
            .lookup(user_id)?
            .ok_or_else(|| AppError::NotRegistered(user_id.to_string()))
    }
}

/// Render a failure as the reply the user sees.
fn report(err: &AppError) -> String {
    match err {
        AppError::NotRegistered(_) => {
            "Your name is not registered yet. Use `register` first.".to_string()
        }
        AppError::NoOpenShift(name) => {
            format!("No pending entry found for {}. Use `clock-in` first.", name)
        }
        other => format!("Sorry, that did not work: {}", other),
    }
}

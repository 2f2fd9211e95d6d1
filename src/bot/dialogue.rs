//! Multi-step name registration, modeled as an explicit per-user state
//! machine instead of leaning on a transport's conversation abstraction.

use std::collections::HashMap;

/// Where a user currently stands in the registration dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    /// A `register` prompt went out; the next free-text message is the name.
    AwaitingName,
}

/// Dialogue states for every user seen so far. An absent key reads as Idle,
/// so the map only ever holds users with a dialogue actually in progress.
#[derive(Debug, Default)]
pub struct Dialogues {
    states: HashMap<String, DialogueState>,
}

impl Dialogues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, user_id: &str) -> DialogueState {
        self.states.get(user_id).copied().unwrap_or_default()
    }

    pub fn await_name(&mut self, user_id: &str) {
        self.states
            .insert(user_id.to_string(), DialogueState::AwaitingName);
    }

    pub fn reset(&mut self, user_id: &str) {
        self.states.remove(user_id);
    }
}

//! Transport-facing layer: command routing and the registration dialogue.
//! Everything here is transport-agnostic; the CLI (or any chat bridge)
//! feeds events in and prints the replies it gets back.

pub mod dialogue;
pub mod router;

use crate::bot::dialogue::DialogueState;
use crate::bot::router::Event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::io::{BufRead, stdin};

/// Handle the `register` command.
///
/// Drives the registration dialogue over stdin: the router either
/// short-circuits (already registered) or asks for the name, in which case
/// the next line is fed back in as the reply. Typing `/cancel` aborts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { user } = cmd {
        let mut router = super::router(cfg);

        println!("{}", router.handle(user, Event::Register));
        if router.state(user) != DialogueState::AwaitingName {
            return Ok(());
        }

        let mut line = String::new();
        stdin().lock().read_line(&mut line)?;
        let reply = Event::from_message(line.trim_end_matches(['\r', '\n']));
        println!("{}", router.handle(user, reply));
    }
    Ok(())
}

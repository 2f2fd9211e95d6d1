use crate::bot::router::Event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `cancel` command.
///
/// Dialogue state lives per transport session; a fresh CLI invocation starts
/// Idle, so this reports "nothing to cancel" unless a dialogue is actually
/// in progress (the in-dialogue path is `/cancel` on stdin during register).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { user } = cmd {
        let mut router = super::router(cfg);
        println!("{}", router.handle(user, Event::Cancel));
    }
    Ok(())
}

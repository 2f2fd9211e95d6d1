use crate::bot::router::Event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time;

/// Handle the `clock-out` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ClockOut { user, at } = cmd {
        let (t, d) = time::resolve_now(at.as_ref())?;
        let mut router = super::router(cfg);
        println!("{}", router.handle(user, Event::ClockOut { at: t, on: d }));
    }
    Ok(())
}

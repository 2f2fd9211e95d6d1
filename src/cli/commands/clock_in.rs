use crate::bot::router::Event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time;

/// Handle the `clock-in` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ClockIn { user, at } = cmd {
        let (t, d) = time::resolve_now(at.as_ref())?;
        let mut router = super::router(cfg);
        println!("{}", router.handle(user, Event::ClockIn { at: t, on: d }));
    }
    Ok(())
}

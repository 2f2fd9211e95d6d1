use crate::bot::router;
use crate::errors::AppResult;

/// Handle the `start` command: print the welcome/usage text.
pub fn handle() -> AppResult<()> {
    println!("{}", router::USAGE);
    Ok(())
}

//! shiftlog main entrypoint.

use shiftlog::run;
use shiftlog::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}

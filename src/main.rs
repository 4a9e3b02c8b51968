//! rponto main entrypoint.

use rponto::run;
use rponto::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}

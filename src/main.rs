//! timed main entrypoint.

use timed::ui::messages::{error, info};
use timed::{logging, run};

fn main() {
    logging::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if e.is_parse_error() {
            info("Dates use YYYY-MM-DD, times HH:MM, breaks whole minutes (see `timed --help`)");
        }
        std::process::exit(1);
    }
}

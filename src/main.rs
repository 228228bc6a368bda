//! paycode-portal main entrypoint.

use paycode_portal::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

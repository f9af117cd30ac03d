//! formsmith CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. A failed command has
//! already written its error response; the error is repeated on stderr and
//! the process exits non-zero.

use formsmith::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

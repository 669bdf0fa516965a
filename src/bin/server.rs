//! IntelliChat server binary.
//! Run with: cargo run --bin intellichat-server

use std::process::ExitCode;

use intellichat::startup;

fn main() -> ExitCode {
    startup::run()
}

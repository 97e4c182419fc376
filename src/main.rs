//! sqlfp CLI binary
//!
//! A command-line tool for fingerprinting SQL statements.

use sqlfp::cli::run_cli;
use std::process;

fn main() {
    let exit_code = run_cli();
    process::exit(exit_code);
}

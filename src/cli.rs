//! CLI (Command Line Interface) module
//!
//! A one-shot filter around the library: reads a statement from the
//! argument list or stdin, prints the canonical form, parameters and
//! fingerprint as text or JSON.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;

use crate::error::NormalizeError;
use crate::{normalize_with_placeholder, NormalizeResult, DEFAULT_PLACEHOLDER};

/// Exit codes mirroring the two user-visible failure kinds.
const EXIT_OK: i32 = 0;
const EXIT_UNKNOWN_DIALECT: i32 = 2;
const EXIT_PARSE_ERROR: i32 = 3;
const EXIT_IO_ERROR: i32 = 4;

/// Builds the clap command definition.
fn build_command() -> Command {
    Command::new("sqlfp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fingerprints SQL statements by normalizing away literals and formatting")
        .arg(
            Arg::new("sql")
                .help("SQL statement to fingerprint (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .short('d')
                .long("dialect")
                .value_name("DIALECT")
                .help("SQL dialect: postgres, mysql, sqlite, oracle, ansi or mssql")
                .default_value("ansi"),
        )
        .arg(
            Arg::new("placeholder")
                .short('p')
                .long("placeholder")
                .value_name("TEXT")
                .help("Placeholder emitted in place of literals")
                .default_value(DEFAULT_PLACEHOLDER),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full result record as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn read_input(matches: &ArgMatches) -> std::io::Result<String> {
    if let Some(sql) = matches.get_one::<String>("sql") {
        return Ok(sql.clone());
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_result(result: &NormalizeResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("Error: failed to serialize result: {e}"),
        }
        return;
    }
    println!("{}", result.normalized);
    println!("hash: {}", result.hash);
    println!("params: {:?}", result.params);
}

/// Runs the CLI and returns the process exit code.
pub fn run_cli() -> i32 {
    let matches = build_command().get_matches();

    let sql = match read_input(&matches) {
        Ok(sql) => sql,
        Err(e) => {
            eprintln!("Error: failed to read input: {e}");
            return EXIT_IO_ERROR;
        }
    };

    let dialect = matches
        .get_one::<String>("dialect")
        .map(String::as_str)
        .unwrap_or("ansi");
    let placeholder = matches
        .get_one::<String>("placeholder")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PLACEHOLDER);

    match normalize_with_placeholder(sql.trim(), dialect, placeholder) {
        Ok(result) => {
            print_result(&result, matches.get_flag("json"));
            EXIT_OK
        }
        Err(e @ NormalizeError::UnknownDialect(_)) => {
            eprintln!("Error: {e}");
            EXIT_UNKNOWN_DIALECT
        }
        Err(e @ NormalizeError::Parse(_)) => {
            eprintln!("Error: {e}");
            EXIT_PARSE_ERROR
        }
    }
}

//! DKD progression risk calculator, command-line front end.

use std::io::Read;
use std::process::ExitCode;

use dkd_infra::cli::{CliError, EXIT_OK, EXIT_USAGE, parse_args, run};
use dkd_infra::logging::init_tracing;

fn read_stdin() -> Result<String, CliError> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| CliError::Usage(format!("failed to read stdin: {e}")))?;
    Ok(body)
}

fn main_inner() -> Result<String, CliError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;
    let stdin_body = if args.stdin { Some(read_stdin()?) } else { None };
    run(&args, stdin_body.as_deref())
}

fn main() -> ExitCode {
    init_tracing();

    match main_inner() {
        Ok(out) => {
            print!("{out}");
            ExitCode::from(EXIT_OK)
        }
        Err(err) => {
            eprintln!("dkd-risk: {err}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

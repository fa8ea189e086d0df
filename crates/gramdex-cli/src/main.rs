//! gramdex - translate a regex into an n-gram boolean query.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    match cli::run(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

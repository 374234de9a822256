use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use calq::{error::Error, interpreter::session::Session};
use clap::Parser;

/// calq is an interactive calculator. Type statements ending in ';', such as
/// 'let x = 2 ^ 10; x / 4;', and 'q' to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), BufWriter::new(stdout.lock()), io::stderr());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Io(_)) => {
            eprintln!("{e}");
            ExitCode::from(2)
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        },
    }
}

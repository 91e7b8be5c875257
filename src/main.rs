use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use intcalc::evaluate;

/// intcalc is an easy to use calculator for integer arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intcalc to evaluate each line of a file instead of a single
    /// expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, or a file path with `--file`. Without it,
    /// intcalc starts an interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match (args.file, args.contents) {
        (true, Some(path)) => run_file(&path),
        (true, None) => {
            eprintln!("The --file flag requires a file path.");
            std::process::exit(1);
        },
        (false, Some(expression)) => run_expression(&expression),
        (false, None) => run_prompt(),
    }
}

/// Evaluates a single expression and prints its result.
///
/// The result goes to stdout; an error goes to stderr and exits with code 1.
fn run_expression(expression: &str) {
    match evaluate(expression.trim()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Evaluates a file line by line, printing one result per line.
///
/// Blank lines are skipped. The first failing line is reported to stderr and
/// terminates with exit code 1.
fn run_file(path: &str) {
    let contents = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        run_expression(line);
    }
}

/// Runs the interactive prompt.
///
/// Each line is trimmed and evaluated; results print to stdout and errors to
/// stderr, and the loop always continues. The exact input `exit` or end of
/// input terminates the loop.
fn run_prompt() {
    println!("intcalc {}", env!("CARGO_PKG_VERSION"));
    println!("Enter an expression, or type 'exit' to quit.");

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = input.trim();
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

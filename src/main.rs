use std::io::BufRead;

use clap::Parser;
use minicalc::evaluate_expression;

/// minicalc evaluates a single arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, one line is read from
    /// standard input.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let expression = args.expression.unwrap_or_else(|| {
                                        let mut line = String::new();
                                        std::io::stdin().lock()
                                                        .read_line(&mut line)
                                                        .unwrap_or_else(|e| {
                                                            eprintln!("Failed to read an expression from standard input: {e}");
                                                            std::process::exit(1);
                                                        });
                                        line
                                    });

    match evaluate_expression(expression.trim()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

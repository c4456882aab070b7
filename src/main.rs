use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use symcalc::{Notation, interpreter::evaluator::core::Env, parse_line, run_script};

/// symcalc is a symbolic calculator: expressions may contain variables that
/// have no value yet, and evaluation reduces as far as the bindings allow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symcalc to read a script file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// Parse input as infix notation (`x = 5 + 4 * 3`) instead of RPN
    /// (`5 4 3 * + x =`).
    #[arg(short, long)]
    infix: bool,

    /// The expression or file to evaluate. Omit it to start the interactive
    /// calculator.
    contents: Option<String>,
}

const HELP: &str = "Type 'quit' to quit.
Assignment: 'var expression ='  (infix mode: 'var = expression')
Form expressions with +, -, *, /, ~ (negation), @ (absolute value).
Use a space between each element, e.g., for y_not gets z + 3:
  yes:  y_not z 3 + =
   no:  y_not z3+=
'dump' prints the variable store, 'clear' empties it.";

fn main() {
    let args = Args::parse();

    let notation = if args.infix { Notation::Infix } else { Notation::Rpn };
    let mut env = Env::new();

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };

            match run_script(&script, notation, &mut env) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            }
        },
        None => repl(notation, &mut env),
    }
}

/// Evaluates expressions typed at the command line until 'quit' or EOF.
fn repl(notation: Notation, env: &mut Env) {
    let stdin = io::stdin();

    loop {
        print!("expression/'help'/'quit': ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match line.trim() {
            "" => {},
            "quit" => break,
            "clear" => env.clear(),
            "dump" => {
                for (name, value) in env.dump() {
                    println!("{name} = {value}");
                }
            },
            "help" | "?" | "Help" => println!("{HELP}"),
            input => match parse_line(input, notation) {
                Ok(expr) => match env.eval(&expr) {
                    Ok(value) => println!("{expr} -> {value}"),
                    Err(e) => eprintln!("{e}"),
                },
                Err(e) => {
                    eprintln!("{e}");
                    println!("{HELP}");
                },
            },
        }
    }

    println!("Bye! Thanks for the math!");
}

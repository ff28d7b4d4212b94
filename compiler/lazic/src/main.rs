//! lazi CLI

use std::io::IsTerminal;

use lazi_diagnostic::emitter::{ColorMode, TerminalEmitter};
use lazic::commands::{demo_command, eval_command, lex_command};
use lazic::Session;

fn print_usage() {
    eprintln!("Usage: lazi [--color=auto|always|never] <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  eval <expr>...   Evaluate each expression and print `<expr> = <result>`");
    eprintln!("  lex <expr>...    Print the tokens of each expression");
    eprintln!("  demo             Run the built-in samples");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=lazi_lexer=trace) for logging.");
}

fn main() {
    lazic::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut color = ColorMode::Auto;
    let mut positional: Vec<&str> = Vec::new();

    for arg in args.iter().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                eprintln!("error: invalid --color value `{value}` (expected auto, always or never)");
                std::process::exit(2);
            };
            color = mode;
        } else {
            positional.push(arg);
        }
    }

    let Some((&command, rest)) = positional.split_first() else {
        print_usage();
        return;
    };

    let session = Session::new();
    let mut emitter = TerminalEmitter::stderr(color, std::io::stderr().is_terminal());
    let mut stdout = std::io::stdout().lock();

    let result = match command {
        "eval" => {
            if rest.is_empty() {
                eprintln!("Usage: lazi eval <expr>...");
                std::process::exit(1);
            }
            eval_command(&session, rest, &mut stdout, &mut emitter)
        }
        "lex" => {
            if rest.is_empty() {
                eprintln!("Usage: lazi lex <expr>...");
                std::process::exit(1);
            }
            rest.iter().try_fold(0, |failures, source| {
                lex_command(&session, source, &mut stdout, &mut emitter)
                    .map(|n| failures + n)
            })
        }
        "demo" => demo_command(&session, &mut stdout, &mut emitter),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

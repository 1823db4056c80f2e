use std::{
    env, fs,
    io::{self, Read},
    process,
};

use analyzer::lexer::{fsm, rx, tokens::TokenKind};

fn main() {
    let mut use_rx = false;
    let mut path: Option<String> = None;

    for arg in env::args().skip(1) {
        if arg == "--rx" {
            use_rx = true;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("Usage: analyzer [--rx] [file]");
            process::exit(2);
        }
    }

    let source = match read_source(path.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading input: {}", err);
            process::exit(2);
        }
    };

    let tokens = if use_rx {
        match rx::tokenize(&source) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    } else {
        fsm::tokenize(&source)
    };

    let mut failed = false;

    for token in &tokens {
        if token.kind == TokenKind::Error {
            failed = true;
        }
        println!("{}", token);
    }

    // Error tokens are part of the stream; the exit code is where this
    // caller decides they make the run a failure.
    if failed {
        process::exit(1);
    }
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use capuchin::{
    get_result, interpret,
    interpreter::{environment::Environment, parser::core::Parser, value::core::Object},
};
use clap::Parser as _;

/// capuchin runs programs written in a small language with integers,
/// strings, arrays, hashes and first-class functions.
///
/// Without any source it starts an interactive prompt.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells capuchin to treat `contents` as a path to a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the final value of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print the parsed program instead of running it.
    #[arg(long)]
    print_ast: bool,

    /// Source code, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.print_ast {
        return print_ast(&script);
    }

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Installs a stderr log subscriber, but only if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn print_ast(script: &str) -> ExitCode {
    let (program, errors) = Parser::from_source(script).parse_program();
    if !errors.is_empty() {
        eprintln!("{}", capuchin::error::ParseErrors(errors));
        return ExitCode::FAILURE;
    }

    println!("{program}");
    ExitCode::SUCCESS
}

/// Reads lines from stdin and evaluates each one in a shared environment.
fn repl() -> io::Result<()> {
    const PROMPT: &str = ">> ";

    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match interpret(&line, &env) {
                Ok(Object::Null) => {},
                Ok(value) => writeln!(stdout, "{value}")?,
                Err(e) => writeln!(stdout, "{e}")?,
            }
        }

        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;
    }

    writeln!(stdout)
}

use interp::{eval, run_program, top_env, top_interp};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use zhrl::{Environment, Error, parse_str};

const HISTORY_FILE: &str = ".zhrl_history";

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}

fn describe(e: &Error) -> String {
    match e {
        Error::Syntax(_) => format!("Parse error: {e}"),
        _ => format!("Error: {e}"),
    }
}

fn print_env(env: &Environment) {
    let names: Vec<String> = env.names().iter().map(|name| name.resolve()).collect();
    println!("{}", names.join(" "));
}

fn print_repl_help() {
    println!("Enter an expression such as {{+ 1 2}} to evaluate it.");
    println!("  :env    list top-level names");
    println!("  :help   show this message");
    println!("  :quit   leave the REPL (also :q or Ctrl-D)");
}

fn repl() -> Result<(), String> {
    let env = top_env();
    let mut editor =
        DefaultEditor::new().map_err(|e| format!("Failed to start line editor: {e}"))?;

    let history = history_path();
    if let Some(path) = &history {
        // A missing history file is normal on first run.
        let _ = editor.load_history(path);
    }

    println!("ZHRL REPL");
    println!("Type :help for commands, :quit to exit");
    println!();

    loop {
        let line = match editor.readline("zhrl> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Failed to read input: {e}")),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            ":quit" | ":q" => break,
            ":env" => print_env(&env),
            ":help" => print_repl_help(),
            _ => match parse_str(input).and_then(|expr| eval(&expr, &env)) {
                Ok(result) => println!("{result}"),
                Err(e) => eprintln!("{}", describe(&e)),
            },
        }
    }

    if let Some(path) = &history
        && let Err(e) = editor.save_history(path)
    {
        eprintln!("Warning: could not save history to {}: {e}", path.display());
    }
    Ok(())
}

fn run_file(filename: &str) -> Result<(), String> {
    let contents = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{filename}': {e}"))?;

    if let Some(result) = run_program(&contents).map_err(|e| describe(&e))? {
        println!("{result}");
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  zhrl                Start interactive REPL");
    eprintln!("  zhrl <file.zhrl>    Run a program file and print its last value");
    eprintln!("  zhrl -e <expr>      Evaluate one expression");
    eprintln!("  zhrl --help         Show this help message");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let outcome = match args.as_slice() {
        [_] => repl(),
        [_, flag] if flag == "--help" || flag == "-h" => {
            print_usage();
            Ok(())
        }
        [_, flag, source] if flag == "-e" => top_interp(source)
            .map(|out| println!("{out}"))
            .map_err(|e| describe(&e)),
        [_, file] if !file.starts_with('-') => run_file(file),
        _ => {
            eprintln!("Error: unrecognized arguments");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        process::exit(1);
    }
}

use caraway_lang::cli::{execute_run, CliError, RunOptions, RunResult};
use clap::Parser as ClapParser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "caraway")]
#[command(about = "Caraway - a declarative configuration language compiled to JSON")]
#[command(version)]
struct Cli {
    /// Output JSON file path (prints to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read the document from a file (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Only validate syntax, don't evaluate
    #[arg(long)]
    syntax_only: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let source = match cli.input {
        Some(path) => fs::read_to_string(path).map_err(CliError::Io)?,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = RunOptions {
        source,
        syntax_only: cli.syntax_only,
    };

    match execute_run(&options)? {
        RunResult::SyntaxValid => println!("Syntax is valid"),
        RunResult::Success(output) => {
            let json = if cli.compact {
                serde_json::to_string(&output)
            } else {
                serde_json::to_string_pretty(&output)
            }
            .map_err(CliError::Json)?;

            match cli.output {
                Some(path) => {
                    fs::write(&path, json + "\n").map_err(CliError::Io)?;
                    println!("Successfully parsed and saved to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}

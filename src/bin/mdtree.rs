//! Command-line interface for mdtree
//! This binary tokenizes or parses markdown files and prints the result in one of the processing formats.
//!
//! Usage:
//!   mdtree execute `<path>` [--format `<format>`] [--verbose]  - Process a markdown file
//!   mdtree list-formats                                     - List all available formats

use clap::{Arg, ArgAction, Command};
use mdtree::processor::{available_formats, process_file, ProcessingSpec};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("mdtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting how markdown files are tokenized and parsed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Process a markdown file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-tag', 'ast-treeviz', 'token-simple')")
                        .default_value("ast-tag"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Log parser events to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches
                .get_one::<String>("path")
                .map(String::as_str)
                .unwrap_or_default();
            let format = execute_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("ast-tag");
            init_logging(execute_matches.get_flag("verbose"));
            handle_execute_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Log to stderr, honouring RUST_LOG when it is set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run 'mdtree list-formats' to see the available formats");
        std::process::exit(1);
    });

    let output = process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

/**
 * Component Compiler CLI - compc
 *
 * Runs the component pass pipeline over lowered IR documents
 */
use clap::{Arg, ArgAction, Command};
use component_compiler::logging::{ConsoleLogger, LogLevel, Logger};
use component_compiler_cli::config::CompilerConfig;
use component_compiler_cli::perform_compile::{expand_inputs, perform_compilation};
use component_compiler_cli::version::version_string;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("compc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Component compiler pass runner")
        .arg(
            Arg::new("inputs")
                .value_name("PATTERN")
                .num_args(1..)
                .required(true)
                .help("IR documents (*.ir.json) or glob patterns"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to compc.json"),
        )
        .arg(
            Arg::new("emit-tree")
                .long("emit-tree")
                .action(ArgAction::SetTrue)
                .help("Print each lowered document tree"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["debug", "info", "warn", "error"])
                .help("Override the configured log level"),
        )
        .get_matches();

    let mut config = match load_config(matches.get_one::<String>("config")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };
    if matches.get_flag("emit-tree") {
        config.emit_tree = Some(true);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.parse::<LogLevel>().ok();
    }

    let logger = ConsoleLogger::new(config.log_level());
    logger.debug(&version_string());

    let patterns: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let inputs = match expand_inputs(&patterns) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };

    let result = perform_compilation(&inputs, &config, &logger);

    for (path, outcome) in &result.files {
        match outcome {
            Ok(file) => {
                for diagnostic in &file.diagnostics {
                    eprintln!("{}: {}", path.display(), diagnostic);
                }
                if let Some(tree) = &file.tree {
                    println!("{}", tree);
                }
            }
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    if result.has_failures(config.warnings_as_errors()) {
        process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> anyhow::Result<CompilerConfig> {
    match path {
        Some(path) => CompilerConfig::load(Path::new(path)),
        None if Path::new("compc.json").exists() => CompilerConfig::load(Path::new("compc.json")),
        None => Ok(CompilerConfig::default()),
    }
}

//! Command-line interface for Avid Log Exchange files
//! This binary merges ALE files into a single table, and inspects individual files.
//!
//! Usage:
//!   ale convert `<items>`... [--map SRC:DST]... [-o `<file>`] [--to `<format>`]   - Merge ALE files into one table
//!   ale inspect `<file>` [--format summary|json|ale]                            - Show one parsed document
//!   ale --list-formats                                                        - List available output formats
//!
//! Errors are printed as `error: <cause>` on stderr and exit with status 1.

mod discovery;
mod error;
mod logging;

use ale_babel::FormatRegistry;
use ale_config::{AleConfig, Loader, PROJECT_CONFIG_FILE};
use ale_parser::ale::formats::serialize_ale;
use ale_parser::ale::loader::DocumentLoader;
use ale_parser::{Batch, BatchError, Document, MappingBuilder};
use clap::{Arg, ArgAction, ArgMatches, Command};
use discovery::{discover, DiscoveryOptions};
use error::CliError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn build_cli() -> Command {
    Command::new("ale")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for merging and inspecting Avid Log Exchange files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file layered over the defaults and ./ale.toml")
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Merge the clips of ALE files into one table")
                .arg(
                    Arg::new("items")
                        .help("ALE files or directories containing them")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("map")
                        .long("map")
                        .short('m')
                        .value_name("SRC:DST")
                        .help("Map a source column to an output column (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Write the table to FILE instead of stdout"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .value_name("FORMAT")
                        .help("Output format (see --list-formats)"),
                )
                .arg(
                    Arg::new("mapping-policy")
                        .long("mapping-policy")
                        .help("Column collection without --map")
                        .value_parser(["union", "first-document"]),
                )
                .arg(
                    Arg::new("no-recurse")
                        .long("no-recurse")
                        .help("Do not descend into sub-directories")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("all-files")
                        .long("all-files")
                        .help("Accept files without the .ale extension")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse one ALE file and print it")
                .arg(
                    Arg::new("file")
                        .help("Path to the ALE file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["summary", "json", "ale"])
                        .default_value("summary"),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return Ok(());
    }

    match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        _ => {
            let _ = build_cli().print_help();
            Ok(())
        }
    }
}

/// Defaults, then `./ale.toml` if present, then the `--config` file if one was given.
fn config_loader(matches: &ArgMatches) -> Loader {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    }
}

fn start_logging(matches: &ArgMatches, config: &AleConfig) {
    logging::init_tracing(matches.get_flag("debug"), &config.logging.level);
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut loader = config_loader(matches);
    if let Some(format) = matches.get_one::<String>("to") {
        loader = loader.set_override("convert.format", format.as_str())?;
    }
    if let Some(policy) = matches.get_one::<String>("mapping-policy") {
        loader = loader.set_override("convert.mapping_policy", policy.as_str())?;
    }
    if matches.get_flag("no-recurse") {
        loader = loader.set_override("convert.recurse", false)?;
    }
    if matches.get_flag("all-files") {
        loader = loader.set_override("convert.allow_all_extensions", true)?;
    }
    let config = loader.build()?;
    start_logging(matches, &config);

    // Bad tokens and unknown formats fail before any input is touched.
    let tokens: Vec<&str> = matches
        .get_many::<String>("map")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let mapping = MappingBuilder::from_tokens_or_auto(&tokens, config.convert.mapping_policy)?;

    let registry = FormatRegistry::with_defaults();
    let format = registry.get(&config.convert.format)?;

    let items: Vec<&String> = matches
        .get_many::<String>("items")
        .into_iter()
        .flatten()
        .collect();
    let inputs = discover(
        &items,
        DiscoveryOptions {
            recurse: config.convert.recurse,
            allow_all_extensions: config.convert.allow_all_extensions,
        },
    )?;
    if inputs.is_empty() {
        warn!("No ALE files found");
    }

    let mut batch = Batch::new(mapping);
    for path in &inputs {
        let source = DocumentLoader::from_path(path).map_err(|err| BatchError::new(path, err))?;
        let rows = batch.add_source(path, source.source())?;
        info!(path = %path.display(), rows, "Processed file");
    }

    let report = batch.finish();
    for skipped in &report.skipped {
        warn!(path = %skipped.path.display(), "Skipped clip: {}", skipped.reason);
    }

    let output = format.serialize(&report.table)?;
    write_output(matches.get_one::<String>("output").map(Path::new), &output)
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = config_loader(matches).build()?;
    start_logging(matches, &config);

    let path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file is a required argument"),
    );
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("summary");

    let document = DocumentLoader::from_path(&path)
        .and_then(|loader| loader.parse())
        .map_err(|source| CliError::Input {
            path: path.clone(),
            source,
        })?;

    let output = match format {
        "json" => serde_json::to_string_pretty(&document)? + "\n",
        "ale" => serialize_ale(&document),
        _ => summarize(&path, &document),
    };
    write_output(None, &output)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}

fn summarize(path: &Path, document: &Document) -> String {
    let mut lines = vec![
        format!("File:         {}", path.display()),
        format!("Video format: {}", document.video_format()),
        format!("Audio format: {}", document.audio_format()),
        format!("FPS:          {}", document.fps()),
    ];
    if let Some(film_format) = document.film_format() {
        lines.push(format!("Film format:  {}", film_format));
    }
    if let Some(tape) = document.tape() {
        lines.push(format!("Tape:         {}", tape));
    }
    lines.push(format!(
        "Columns ({}):  {}",
        document.columns().len(),
        document.columns().join(", ")
    ));
    lines.push(format!("Clips:        {}", document.clips().len()));

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, output).map_err(|source| CliError::Output {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}

//! Command-line interface for ini
//! This binary reads, queries, edits and re-serializes INI files.
//!
//! Usage:
//!   ini check `<path>`                                   - Validate a file
//!   ini sections `<path>`                                - List section names
//!   ini get `<path>` `<section>` `<key>`                   - Print a value
//!   ini set `<path>` `<section>` `<key>` `<value>` [-o `<out>`] - Overwrite an existing value
//!   ini dump `<path>` [--format `<ini|json|yaml>`]         - Re-serialize a file
//!
//! Configuration: `ini.toml` in the working directory is picked up when present,
//! and `--config <file>` layers another TOML file on top. `--verbose` raises the
//! log level (RUST_LOG also applies).

use clap::{Arg, ArgAction, ArgMatches, Command};
use ini_config::{IniConfig, Loader, OutputFormat};
use ini_parser::ini::loader::{write_file, DocumentLoader};
use ini_parser::{Document, IniError, RenderOptions};
use std::fmt;
use std::process;
use tracing_subscriber::EnvFilter;

const USER_CONFIG_FILE: &str = "ini.toml";

#[derive(Debug)]
enum CliError {
    Ini(IniError),
    Config(String),
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Ini(err) => write!(f, "{}", err),
            CliError::Config(msg) => write!(f, "configuration: {}", msg),
            CliError::Output(msg) => write!(f, "output: {}", msg),
        }
    }
}

impl From<IniError> for CliError {
    fn from(err: IniError) -> Self {
        CliError::Ini(err)
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the INI file")
        .required(true)
        .index(1)
}

fn build_cli() -> Command {
    Command::new("ini")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and editing INI files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log parser activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a file and report the first error, if any")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("sections")
                .about("List section names in ascending order")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value of a key")
                .arg(path_arg())
                .arg(Arg::new("section").required(true).index(2))
                .arg(Arg::new("key").required(true).index(3)),
        )
        .subcommand(
            Command::new("set")
                .about("Overwrite the value of an existing key and save")
                .arg(path_arg())
                .arg(Arg::new("section").required(true).index(2))
                .arg(Arg::new("key").required(true).index(3))
                .arg(Arg::new("value").required(true).index(4))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write here instead of back to <path>"),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Re-serialize a file")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: ini, json or yaml (default from configuration)")
                        .value_parser(["ini", "json", "yaml"]),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<IniConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().map_err(|e| CliError::Config(e.to_string()))
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(required(sub, "path")),
        Some(("sections", sub)) => handle_sections_command(required(sub, "path")),
        Some(("get", sub)) => handle_get_command(
            required(sub, "path"),
            required(sub, "section"),
            required(sub, "key"),
        ),
        Some(("set", sub)) => {
            let path = required(sub, "path");
            let output = sub.get_one::<String>("output").map(String::as_str);
            handle_set_command(
                path,
                required(sub, "section"),
                required(sub, "key"),
                required(sub, "value"),
                output.unwrap_or(path),
                &config,
            )
        }
        Some(("dump", sub)) => {
            let format = match sub.get_one::<String>("format").map(String::as_str) {
                Some("json") => OutputFormat::Json,
                Some("yaml") => OutputFormat::Yaml,
                Some(_) => OutputFormat::Ini,
                None => config.cli.default_format,
            };
            handle_dump_command(required(sub, "path"), format, &config)
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Fetch an argument clap has already enforced as required.
fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_document(path: &str) -> Result<Document, CliError> {
    Ok(DocumentLoader::from_path(path)?.parse()?)
}

fn render_options(config: &IniConfig) -> Result<RenderOptions, CliError> {
    config
        .serializer
        .render_options()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Handle the check command
fn handle_check_command(path: &str) -> Result<(), CliError> {
    let doc = load_document(path)?;
    println!("ok: {} sections", doc.section_names().len());
    Ok(())
}

/// Handle the sections command
fn handle_sections_command(path: &str) -> Result<(), CliError> {
    for name in load_document(path)?.section_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Handle the get command
fn handle_get_command(path: &str, section: &str, key: &str) -> Result<(), CliError> {
    let doc = load_document(path)?;
    println!("{}", doc.get(section, key)?);
    Ok(())
}

/// Handle the set command
fn handle_set_command(
    path: &str,
    section: &str,
    key: &str,
    value: &str,
    output: &str,
    config: &IniConfig,
) -> Result<(), CliError> {
    let mut doc = load_document(path)?;
    doc.set(section, key, value)?;
    let rendered = doc.render_with(&render_options(config)?)?;
    write_file(output, &rendered)?;
    tracing::info!(%output, %section, %key, "value updated");
    Ok(())
}

/// Handle the dump command
fn handle_dump_command(path: &str, format: OutputFormat, config: &IniConfig) -> Result<(), CliError> {
    let doc = load_document(path)?;
    let formatted = match format {
        OutputFormat::Ini => doc.render_with(&render_options(config)?)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&doc)
                .map_err(|e| CliError::Output(e.to_string()))?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&doc).map_err(|e| CliError::Output(e.to_string()))?
        }
    };
    print!("{}", formatted);
    Ok(())
}

//! Command-line interface for combilex
//! Runs the bundled arithmetic grammar and identifier sanitizer from the shell.
//!
//! Usage:
//!   combilex tokens `<path>`          - Print the tokens of a file ('-' reads stdin)
//!   combilex eval `<expression>`      - Lex, parse and evaluate an arithmetic expression
//!   combilex c-name `<name>`          - Rewrite a name into a valid C identifier
//!
//! Global options: `--config <file>` layers a TOML file over the defaults and
//! over `./combilex.toml`, `--format <text|json|yaml>` overrides `output.format`.

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use std::io::Read;

use combilex::config::{CombilexConfig, Loader, OutputFormat, LOCAL_CONFIG_FILE};
use combilex::grammars::arithmetic::{self, ArithToken};
use combilex::grammars::c_identifier::CIdentifier;
use combilex::Token;

fn main() {
    env_logger::init();

    let matches = Command::new("combilex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex, parse and evaluate arithmetic expressions with the combilex toolkit")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["text", "json", "yaml"])
                .help("Output format (overrides output.format)"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of an arithmetic source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate an arithmetic expression")
                .arg(
                    Arg::new("expression")
                        .help("Expression using integers, +, * and parentheses")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("c-name")
                .about("Rewrite a name into a valid C identifier")
                .arg(
                    Arg::new("name")
                        .help("The name to rewrite")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    let config = load_config(&matches);
    log::debug!("configuration: {:?}", config);

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(&config, path);
        }
        Some(("eval", eval_matches)) => {
            let expression = eval_matches.get_one::<String>("expression").unwrap();
            handle_eval_command(&config, expression);
        }
        Some(("c-name", c_name_matches)) => {
            let name = c_name_matches.get_one::<String>("name").unwrap();
            handle_c_name_command(&config, name);
        }
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> CombilexConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(&format!("Invalid format override: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("Error loading configuration: {}", e)))
}

/// Handle the tokens command
fn handle_tokens_command(config: &CombilexConfig, path: &str) {
    let (file_name, source) = read_source(config, path);
    let tokens = arithmetic::lexer()
        .lex(&file_name, &source)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let output = match config.output.format {
        OutputFormat::Text => format_tokens(&tokens),
        format => render(&tokens, format),
    };
    print!("{}", output);
}

#[derive(Serialize)]
struct EvalReport<'a> {
    expression: &'a str,
    tree: String,
    value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [Token<ArithToken>]>,
}

/// Handle the eval command
fn handle_eval_command(config: &CombilexConfig, expression: &str) {
    let file_name = &config.input.stdin_name;
    let tokens = arithmetic::lexer()
        .lex(file_name, expression)
        .unwrap_or_else(|e| fail(&e.to_string()));
    let tree = arithmetic::parse_tokens(&tokens).unwrap_or_else(|e| {
        log::debug!("parse failed: {:?}", e);
        fail(&e.to_string())
    });
    let value = arithmetic::eval(&tree).unwrap_or_else(|e| fail(&e.to_string()));

    match config.output.format {
        OutputFormat::Text => {
            if config.output.show_tokens {
                print!("{}", format_tokens(&tokens));
            }
            println!("{}", value);
        }
        format => {
            let report = EvalReport {
                expression,
                tree: tree.to_string(),
                value,
                tokens: config.output.show_tokens.then_some(tokens.as_slice()),
            };
            print!("{}", render(&report, format));
        }
    }
}

#[derive(Serialize)]
struct CNameReport<'a> {
    name: &'a str,
    c_name: &'a str,
}

/// Handle the c-name command
fn handle_c_name_command(config: &CombilexConfig, name: &str) {
    let ident = CIdentifier::new(name);
    match config.output.format {
        OutputFormat::Text => println!("{}", ident),
        format => {
            let report = CNameReport {
                name,
                c_name: ident.as_code(),
            };
            print!("{}", render(&report, format));
        }
    }
}

fn read_source(config: &CombilexConfig, path: &str) -> (String, String) {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| fail(&format!("Error reading stdin: {}", e)));
        (config.input.stdin_name.clone(), source)
    } else {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(&format!("Error reading file: {}", e)));
        (path.to_string(), source)
    }
}

fn format_tokens(tokens: &[Token<ArithToken>]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\t{}\n", token.location, token))
        .collect()
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        OutputFormat::Text => unreachable!("text output is formatted by each command"),
    };
    rendered.unwrap_or_else(|e| fail(&format!("Error formatting output: {}", e)))
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

// Command-line interface for mark
//
// This binary compiles Markdown files into the wiki's storage format and converts fetched
// storage pages back into Markdown. All conversion work is done by the mark-babel library; this
// crate only reads files, loads configuration and reports errors.
//
// Usage:
//  mark compile <input> [--output <file>] [--drop-h1] [--json]  - Markdown to storage HTML
//  mark title <input>                                          - Print the leading H1 text
//  mark reverse <input> --output <file>                        - Storage HTML to Markdown
//
// Every command is one-shot: any read, conversion or write failure prints the error and exits
// with status 1.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, info};
use mark_babel::{
    compile_page, extract_leading_h1, html_to_markdown_file, CompileOptions, PageOptions,
    TemplateRegistry,
};
use mark_config::{Loader, MarkConfig};
use std::fmt::Display;
use std::fs;

fn build_cli() -> Command {
    Command::new("mark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to wiki storage format and back")
        .long_about(
            "mark compiles Markdown documents into the wiki's storage format.\n\n\
            Commands:\n  \
            - compile: Markdown to storage HTML\n  \
            - title:   Print the document's leading H1\n  \
            - reverse: Storage HTML to Markdown\n\n\
            Examples:\n  \
            mark compile page.md                    # Storage HTML to stdout\n  \
            mark compile page.md --drop-h1 --json   # Title and body as JSON\n  \
            mark reverse page.html -o page.md       # Back to Markdown",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a Markdown file to storage format")
                .long_about(
                    "Compile a Markdown file to the wiki's storage format.\n\n\
                    Fenced code blocks become code macros. The info string carries the\n\
                    language plus the `collapse` and `title <text>` directives:\n\n  \
                    ```go collapse title Example\n\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown file to compile")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("drop-h1")
                        .long("drop-h1")
                        .help("Remove the leading H1 from the compiled body")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Write the page title and body as a JSON object")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("title")
                .about("Print the text of the document's leading H1")
                .arg(
                    Arg::new("input")
                        .help("Markdown file to read")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("reverse")
                .about("Convert storage-format HTML back to Markdown")
                .long_about(
                    "Convert a storage-format page back to Markdown.\n\n\
                    HTML comments are kept, so inline comment markers come back as\n\
                    bracketing comments and survive another compile.",
                )
                .arg(
                    Arg::new("input")
                        .help("Storage HTML file to convert")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Markdown file to write")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logger(matches.get_count("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("compile", sub_matches)) => handle_compile_command(sub_matches, &config),
        Some(("title", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            handle_title_command(input);
        }
        Some(("reverse", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = required_arg(sub_matches, "output");
            handle_reverse_command(input, output);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

/// Default filter is `warn`; each `-v` raises it one level. `RUST_LOG` wins when set.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_cli_config(explicit_path: Option<&str>) -> MarkConfig {
    let loader = Loader::new().with_optional_file("mark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(format!("Failed to load configuration: {err}")))
}

/// Handle the compile command
fn handle_compile_command(sub_matches: &ArgMatches, config: &MarkConfig) {
    let input = required_arg(sub_matches, "input");
    let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

    let compile_options = CompileOptions::from(&config.compile);
    let mut page_options = PageOptions::from(&config.page);
    if sub_matches.get_flag("drop-h1") {
        page_options.drop_leading_h1 = true;
    }

    let source = read_input(input);
    let registry = TemplateRegistry::default();
    let page = compile_page(&source, &registry, &compile_options, &page_options)
        .unwrap_or_else(|e| fail(format!("Compile error: {e}")));
    info!("compiled {input} (title: {:?})", page.title);

    let rendered = if sub_matches.get_flag("json") {
        let mut json = serde_json::to_string_pretty(&page)
            .unwrap_or_else(|e| fail(format!("Serialization error: {e}")));
        json.push('\n');
        json
    } else {
        page.body
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .unwrap_or_else(|e| fail(format!("Error writing file '{path}': {e}")));
            debug!("wrote storage output to {path}");
        }
        None => print!("{rendered}"),
    }
}

/// Handle the title command
fn handle_title_command(input: &str) {
    let source = read_input(input);
    println!("{}", extract_leading_h1(&source));
}

/// Handle the reverse command
fn handle_reverse_command(input: &str, output: &str) {
    let source = read_input(input);
    html_to_markdown_file(&source, output)
        .unwrap_or_else(|e| fail(format!("Reverse conversion failed: {e}")));
    info!("converted {input} to {output}");
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(format!("Error reading file '{path}': {e}")))
}

fn required_arg<'m>(matches: &'m ArgMatches, name: &str) -> &'m str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(format!("Missing required argument '{name}'")))
}

fn fail(message: impl Display) -> ! {
    log::error!("{message}");
    eprintln!("Error: {message}");
    std::process::exit(1);
}

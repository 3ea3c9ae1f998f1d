use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    let input = Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath);
    let output = Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path")
        .value_hint(ValueHint::FilePath);

    Command::new("mark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to wiki storage format and back")
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
                .help("Increase log output")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a Markdown file to storage format")
                .arg(input.clone())
                .arg(output.clone())
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
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("reverse")
                .about("Convert storage-format HTML back to Markdown")
                .arg(input)
                .arg(output.required(true)),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

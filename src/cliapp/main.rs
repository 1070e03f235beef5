use clap::Parser;
use cliapp::config::AppConfig;
use cliapp::error::{CliError, Result};
use cliapp::{Application, Arg, CommandEntry};
use log::LevelFilter;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(cli: Cli) -> Result<()> {
    let width = cli.width.unwrap_or_else(AppConfig::detect_terminal_width);
    let config = AppConfig::new(
        "cliapp",
        "A small demo of command registration and dispatch.",
        width,
    );
    let app = build_app(config)?;

    match cli.command {
        Some(command) => {
            let args: Vec<Arg> = cli.args.iter().map(|raw| parse_arg(raw)).collect();
            app.run(&command, &args)
        }
        None => {
            app.show_help();
            Ok(())
        }
    }
}

fn build_app(config: AppConfig) -> Result<Application> {
    let mut app = Application::new(config);
    let help_text: Arc<OnceLock<String>> = Arc::new(OnceLock::new());
    let help_for_handler = Arc::clone(&help_text);

    app.add([
        CommandEntry::new("echo", handle_echo)
            .with_description("Print the given arguments separated by spaces"),
        CommandEntry::new("sum", handle_sum)
            .with_description("Add up numeric arguments and print the total"),
        CommandEntry::new("help", move |_: &[Arg]| {
            if let Some(text) = help_for_handler.get() {
                print!("{}", text);
            }
            Ok(())
        })
        .with_description("Show this help"),
    ]);
    app.add_option("version", Some(handle_version))?;

    // Registration is complete, so the layout this fills is final.
    help_text.get_or_init(|| app.help_text());
    Ok(app)
}

fn handle_echo(args: &[Arg]) -> Result<()> {
    let words: Vec<String> = args.iter().map(display_arg).collect();
    println!("{}", words.join(" "));
    Ok(())
}

fn handle_sum(args: &[Arg]) -> Result<()> {
    let mut total = 0.0;
    for arg in args {
        let Some(n) = arg.as_f64() else {
            return Err(CliError::handler(format!(
                "'{}' is not a number",
                display_arg(arg)
            )));
        };
        total += n;
    }
    println!("{}", total);
    Ok(())
}

fn handle_version(_: &[Arg]) -> Result<()> {
    println!("cliapp {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// JSON literals decode to their value, anything else stays a string.
fn parse_arg(raw: &str) -> Arg {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn display_arg(arg: &Arg) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cliapp", version)]
#[command(about = "Dispatch a registered command or print its help", long_about = None)]
pub struct Cli {
    /// Command to run (case-insensitive); prints help when omitted
    pub command: Option<String>,

    /// Arguments passed to the command. JSON literals are decoded, anything else is a string
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Terminal width used for help output (defaults to the detected width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

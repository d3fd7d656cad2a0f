use clap::Parser;

/// Interactive calculator with a memory register.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Don't print the greeting
    #[arg(short, long)]
    pub quiet: bool,

    /// Prompt shown before each line
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

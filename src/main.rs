mod calc;
mod config;
mod exec;
mod lex;
mod message;
mod op;
mod parse;
mod status;

use clap::Parser;
use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor, Result};

use crate::{calc::Calculator, config::Config, status::Status};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    if config.no_color {
        colored::control::set_override(false);
    }
    if !config.quiet {
        println!("{}", message::GREETING.blue());
    }
    repl(&config)
}

fn repl(config: &Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let prompt = config.prompt.blue().to_string();
    let mut c = Calculator::new();
    loop {
        let input = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("exit");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        if !input.trim().is_empty() {
            rl.add_history_entry(input.as_str())?;
        }

        let outcome = c.process_line(&input);
        if let Some(t) = &outcome.truncation {
            println!("{}", message::truncation_warning(t).yellow());
        }
        let Some(output) = outcome.output else {
            return Ok(());
        };
        match outcome.status {
            Status::Ok | Status::MemoryOp => println!("{}", output.green()),
            Status::Help => println!("{}", output),
            s if s.is_error() => println!("{}", output.red()),
            _ => println!("{}", output),
        }
    }
}

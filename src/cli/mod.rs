//! Command-line mode.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::pass::GenerateError;

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            eprintln!("Try `strongpass --help`.");
            return 1;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => 0,
        Err(Stop::Failed(err)) => {
            prompts::generation_failed(&err);
            match err {
                GenerateError::InvalidPolicy(_) => 2,
                GenerateError::GenerationExhausted { .. } => 1,
            }
        }
    }
}

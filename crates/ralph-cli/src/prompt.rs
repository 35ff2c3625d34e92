use ralph_core::prd::Prompt;
use std::io::{BufRead, Write};

/// Asks on stdout, answers from stdin. End of input reads as an empty answer.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

use crate::domain::ports::Confirm;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Asks on a writer and reads the answer from a reader; stdin/stdout in the binary.
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl ConsoleConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{} (y/n): ", question)?;
        self.output.flush()?;

        // 跳過空白行，取第一個非空白字元
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            if let Some(choice) = line.trim_start().chars().next() {
                return Ok(matches!(choice, 'y' | 'Y'));
            }
        }
    }
}

/// Fixed answer, for `--follow-up yes|no` and headless runs.
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}

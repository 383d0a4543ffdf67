//! Stdio adapter for Console

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tokio::sync::Mutex;

use crate::domain::ports::Console;
use crate::error::ConsoleError;

/// Console reading lines from stdin and writing to stdout
///
/// Logging goes to stderr, so stdout carries only what the operator should see.
pub struct StdioConsole {
    input: Mutex<Lines<BufReader<Stdin>>>,
    output: Mutex<Stdout>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            output: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Put the `?` marker on the question's own line, after any leading blank lines
fn question_line(prompt: &str) -> String {
    let question = prompt.trim_start_matches('\n');
    let breaks = &prompt[..prompt.len() - question.len()];
    format!("{}? {} ", breaks, question)
}

#[async_trait]
impl Console for StdioConsole {
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        {
            let mut output = self.output.lock().await;
            output.write_all(question_line(prompt).as_bytes()).await?;
            output.flush().await?;
        }

        match self.input.lock().await.next_line().await? {
            Some(line) => Ok(line),
            None => Err(ConsoleError::Closed),
        }
    }

    async fn write_line(&self, text: &str) -> Result<(), ConsoleError> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(())
    }
}

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::{abstract_trait::ConsoleTrait, utils::AppError};

/// Operator terminal: stdout for the report, one line of stdin per question.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsoleTrait for StdConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }

    async fn ask(&self, question: &str) -> Result<String, AppError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(question.as_bytes()).await?;
        stdout.flush().await?;

        let mut answer = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut answer)
            .await?;

        Ok(answer)
    }
}

/// Console with a canned answer that records everything written to it.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answer: String,
    lines: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub fn output(&self) -> String {
        self.lines().join("\n")
    }
}

#[async_trait]
impl ConsoleTrait for ScriptedConsole {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    async fn ask(&self, question: &str) -> Result<String, AppError> {
        if let Ok(mut questions) = self.questions.lock() {
            questions.push(question.to_string());
        }

        Ok(self.answer.clone())
    }
}

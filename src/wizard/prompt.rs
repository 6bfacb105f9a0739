use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors raised while asking questions
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before '{0}' was answered")]
    EndOfInput(String),

    #[error("'{prompt}' received an answer of the wrong kind")]
    UnexpectedAnswer { prompt: String },
}

/// One step of an interactive flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Pick one of `options`. `default` indexes into `options`.
    Select {
        prompt: String,
        options: Vec<String>,
        default: Option<usize>,
    },
    /// Free text. An empty answer takes `default`, or the empty string.
    Text {
        prompt: String,
        default: Option<String>,
    },
    /// Yes or no.
    Confirm { prompt: String, default: bool },
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Select { prompt, .. }
            | Question::Text { prompt, .. }
            | Question::Confirm { prompt, .. } => prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index into the question's options.
    Selected(usize),
    Text(String),
    Confirmed(bool),
}

/// Source of answers for the wizards.
///
/// Only [`ask`](Prompter::ask) and [`note`](Prompter::note) need implementing; the typed
/// helpers are built on top of them.
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError>;

    /// Show an informational line (headers, warnings, summaries).
    fn note(&mut self, message: &str) -> Result<(), PromptError>;

    fn select(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        let question = Question::Select {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            default: default.and_then(|d| options.iter().position(|o| *o == d)),
        };
        match self.ask(&question)? {
            Answer::Selected(index) if index < options.len() => Ok(options[index].to_string()),
            _ => Err(PromptError::UnexpectedAnswer {
                prompt: prompt.to_string(),
            }),
        }
    }

    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        let question = Question::Text {
            prompt: prompt.to_string(),
            default: default.map(str::to_string),
        };
        match self.ask(&question)? {
            Answer::Text(value) => Ok(value),
            _ => Err(PromptError::UnexpectedAnswer {
                prompt: prompt.to_string(),
            }),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let question = Question::Confirm {
            prompt: prompt.to_string(),
            default,
        };
        match self.ask(&question)? {
            Answer::Confirmed(value) => Ok(value),
            _ => Err(PromptError::UnexpectedAnswer {
                prompt: prompt.to_string(),
            }),
        }
    }
}

/// Line-based prompter over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput(prompt.to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn ask_select(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<Answer, PromptError> {
        loop {
            writeln!(self.output, "{prompt}")?;
            for (i, option) in options.iter().enumerate() {
                let marker = if Some(i) == default { " (default)" } else { "" };
                writeln!(self.output, "  {}) {}{}", i + 1, option, marker)?;
            }
            write!(self.output, "> ")?;

            let line = self.read_answer(prompt)?;
            if line.is_empty() {
                if let Some(index) = default {
                    return Ok(Answer::Selected(index));
                }
            } else if let Some(index) = line
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=options.len()).contains(n))
            {
                return Ok(Answer::Selected(index - 1));
            } else if let Some(index) = options.iter().position(|o| o.eq_ignore_ascii_case(&line))
            {
                return Ok(Answer::Selected(index));
            }

            writeln!(
                self.output,
                "Invalid choice, enter a number between 1 and {}",
                options.len()
            )?;
        }
    }

    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<Answer, PromptError> {
        match default {
            Some(default) => write!(self.output, "{prompt} [{default}]: ")?,
            None => write!(self.output, "{prompt}: ")?,
        }

        let line = self.read_answer(prompt)?;
        if line.is_empty() {
            return Ok(Answer::Text(default.unwrap_or_default().to_string()));
        }
        Ok(Answer::Text(line))
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<Answer, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.output, "{prompt} [{hint}]: ")?;

            let line = self.read_answer(prompt)?;
            match line.to_ascii_lowercase().as_str() {
                "" => return Ok(Answer::Confirmed(default)),
                "y" | "yes" => return Ok(Answer::Confirmed(true)),
                "n" | "no" => return Ok(Answer::Confirmed(false)),
                _ => writeln!(self.output, "Please answer yes or no")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        match question {
            Question::Select {
                prompt,
                options,
                default,
            } => self.ask_select(prompt, options, *default),
            Question::Text { prompt, default } => self.ask_text(prompt, default.as_deref()),
            Question::Confirm { prompt, default } => self.ask_confirm(prompt, *default),
        }
    }

    fn note(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

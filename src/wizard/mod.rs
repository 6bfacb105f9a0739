//! Interactive configuration wizards.
//!
//! A wizard is an ordered list of questions asked through a [`Prompter`]. The flows here
//! only build a [`ConfigDocument`]; writing it is left to the caller.

pub mod prompt;

pub use prompt::{Answer, PromptError, Prompter, Question, TerminalPrompter};

use crate::config::templates::{default_category, default_log_path, default_source_path};
use crate::models::{Category, ConfigDocument, Configuration, DisplayMode, LogLevel, OutputTarget};
use camino::Utf8PathBuf;

const OUTPUT_OPTIONS: [&str; 4] = ["console", "file", "both", "none"];

/// Full `init` flow: logging settings followed by any number of categories.
pub fn init_wizard<P: Prompter + ?Sized>(prompter: &mut P) -> Result<ConfigDocument, PromptError> {
    prompter.note("== gopaper configuration generator ==")?;
    prompter.note("")?;
    prompter.note("-- Logging configuration --")?;
    let configuration = ask_configuration(prompter, true)?;

    prompter.note("")?;
    prompter.note("-- Categories configuration --")?;
    prompter.note("Categories define wallpaper collections")?;

    let mut categories = Vec::new();
    if prompter.confirm("Do you want to add categories now?", true)? {
        categories = collect_categories(prompter)?;
    }
    if categories.is_empty() {
        categories.push(default_category());
    }

    Ok(ConfigDocument {
        configuration,
        categories,
    })
}

/// `baseconfig` flow: only the logging settings. A default category is always added.
pub fn base_config_wizard<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<ConfigDocument, PromptError> {
    let configuration = ask_configuration(prompter, false)?;
    Ok(ConfigDocument {
        configuration,
        categories: vec![default_category()],
    })
}

/// Ask for the `configuration` section.
///
/// With `log_file_only_when_needed`, the log file question is skipped unless the chosen
/// output writes to a file.
fn ask_configuration<P: Prompter + ?Sized>(
    prompter: &mut P,
    log_file_only_when_needed: bool,
) -> Result<Configuration, PromptError> {
    let output = prompter.select("Where should logs be output?", &OUTPUT_OPTIONS, Some("console"))?;
    let output: OutputTarget = output.parse().unwrap_or_default();

    let log_file = if output.writes_file() || !log_file_only_when_needed {
        let default = default_log_path();
        let value = prompter.text("Log file path", Some(default.as_str()))?;
        Some(Utf8PathBuf::from(value))
    } else {
        None
    };

    let level_names: Vec<&str> = LogLevel::ALL.iter().map(|l| l.as_str()).collect();
    let log_level = prompter.select("Log level", &level_names, Some("info"))?;
    let log_level: LogLevel = log_level.parse().unwrap_or_default();

    let show_caller = prompter.confirm("Show caller information in logs?", false)?;

    Ok(Configuration {
        output,
        log_file,
        log_level,
        show_caller,
    })
}

fn collect_categories<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Vec<Category>, PromptError> {
    let mode_names: Vec<&str> = DisplayMode::ALL.iter().map(|m| m.as_str()).collect();
    let mut categories = Vec::new();

    loop {
        prompter.note("")?;
        prompter.note(&format!("-- Category #{} --", categories.len() + 1))?;

        let name = prompter.text("Category name (e.g., Landscapes, Wallhaven)", None)?;
        if name.trim().is_empty() {
            prompter.note("Category name is required")?;
            continue;
        }
        let name = name.trim().to_string();

        let enabled = prompter.confirm("Enable this category?", true)?;
        let default_source = default_source_path(&name);
        let source = prompter.text(
            "Source directory (where wallpapers are stored)",
            Some(default_source.as_str()),
        )?;
        let mode = prompter.select("Wallpaper display mode", &mode_names, Some("crop"))?;

        let category = Category::new(name, source)
            .with_mode(DisplayMode::parse_lenient(&mode))
            .with_enabled(enabled);
        show_summary(prompter, &category)?;
        categories.push(category);

        if !prompter.confirm("Add another category?", false)? {
            break;
        }
    }

    Ok(categories)
}

fn show_summary<P: Prompter + ?Sized>(
    prompter: &mut P,
    category: &Category,
) -> Result<(), PromptError> {
    prompter.note("Category summary:")?;
    prompter.note(&format!("  Name:    {}", category.name))?;
    prompter.note(&format!(
        "  Enabled: {}",
        if category.enabled { "Yes" } else { "No" }
    ))?;
    prompter.note(&format!("  Mode:    {}", category.mode))?;
    prompter.note(&format!("  Source:  {}", category.source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records every prompt it was asked.
    struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
        notes: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                asked: Vec::new(),
                notes: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
            self.asked.push(question.prompt().to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| PromptError::EndOfInput(question.prompt().to_string()))
        }

        fn note(&mut self, message: &str) -> Result<(), PromptError> {
            self.notes.push(message.to_string());
            Ok(())
        }
    }

    fn text(value: &str) -> Answer {
        Answer::Text(value.to_string())
    }

    #[test]
    fn test_init_wizard_console_skips_log_file() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Selected(0),     // console
            Answer::Selected(1),     // debug
            Answer::Confirmed(true), // show caller
            Answer::Confirmed(false), // no categories
        ]);

        let document = init_wizard(&mut prompter).unwrap();

        assert!(!prompter.asked.iter().any(|p| p == "Log file path"));
        assert_eq!(document.configuration.output, OutputTarget::Console);
        assert_eq!(document.configuration.log_level, LogLevel::Debug);
        assert!(document.configuration.show_caller);
        assert_eq!(document.categories, vec![default_category()]);
    }

    #[test]
    fn test_init_wizard_collects_categories() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Selected(2), // both
            text("/var/log/gopaper.log"),
            Answer::Selected(2), // info
            Answer::Confirmed(false),
            Answer::Confirmed(true), // add categories
            text(""),                // empty name is rejected
            text("Space"),
            Answer::Confirmed(true),
            text("/walls/space"),
            Answer::Selected(4), // fit
            Answer::Confirmed(true), // add another
            text("Retro"),
            Answer::Confirmed(false),
            text("/walls/retro"),
            Answer::Selected(1), // tile
            Answer::Confirmed(false),
        ]);

        let document = init_wizard(&mut prompter).unwrap();

        assert_eq!(document.configuration.output, OutputTarget::Both);
        assert_eq!(
            document.configuration.log_file,
            Some(Utf8PathBuf::from("/var/log/gopaper.log"))
        );
        assert_eq!(
            document.categories,
            vec![
                Category::new("Space", "/walls/space").with_mode(DisplayMode::Fit),
                Category::new("Retro", "/walls/retro")
                    .with_mode(DisplayMode::Tile)
                    .with_enabled(false),
            ]
        );
        assert!(prompter.notes.iter().any(|n| n == "Category name is required"));
        assert!(prompter.notes.iter().any(|n| n.contains("/walls/retro")));
    }

    #[test]
    fn test_base_config_wizard_always_asks_log_file() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Selected(3), // none
            text("logs/gopaper.log"),
            Answer::Selected(3), // warn
            Answer::Confirmed(false),
        ]);

        let document = base_config_wizard(&mut prompter).unwrap();

        assert_eq!(document.configuration.output, OutputTarget::None);
        assert_eq!(document.configuration.log_level, LogLevel::Warn);
        assert_eq!(document.categories.len(), 1);
        assert!(prompter.asked.iter().any(|p| p == "Log file path"));
    }

    #[test]
    fn test_wizard_propagates_end_of_input() {
        let mut prompter = ScriptedPrompter::new(vec![Answer::Selected(0)]);
        let err = init_wizard(&mut prompter).unwrap_err();
        assert!(matches!(err, PromptError::EndOfInput(_)));
    }
}

use std::fmt;

/// A parsed player instruction: an action word, an optional object word and,
/// for free-text commands such as writing a note, the raw remainder of the
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    command_word: String,
    second_word: Option<String>,
    complete_args: Option<String>,
}

impl Command {
    pub fn new(command_word: &str, second_word: Option<&str>) -> Self {
        Self {
            command_word: command_word.to_string(),
            second_word: second_word.map(str::to_string),
            complete_args: None,
        }
    }

    /// Attach the raw argument text.
    pub fn with_args(mut self, complete_args: &str) -> Self {
        self.complete_args = Some(complete_args.to_string());
        self
    }

    pub fn command_word(&self) -> &str {
        &self.command_word
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second_word.as_deref()
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }

    pub fn complete_args(&self) -> Option<&str> {
        self.complete_args.as_deref()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.second_word {
            Some(second) => write!(f, "{} {}", self.command_word, second),
            None => f.write_str(&self.command_word),
        }
    }
}

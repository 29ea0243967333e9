use std::io::Write;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// Centralized feedback writer for CLI commands.
///
/// Writes emoji-tagged lines to an injected sink so tests can capture the
/// output instead of scraping stdout.
pub struct CommandFeedback<W: Write> {
    out: W,
}

impl<W: Write> CommandFeedback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one feedback line
    pub fn send(&mut self, feedback_type: FeedbackType, message: &str) -> std::io::Result<()> {
        writeln!(self.out, "{} {}", feedback_type.emoji(), message)
    }

    /// Write success feedback
    pub fn success(&mut self, message: &str) -> std::io::Result<()> {
        self.send(FeedbackType::Success, message)
    }

    /// Write error feedback
    pub fn error(&mut self, message: &str) -> std::io::Result<()> {
        self.send(FeedbackType::Error, message)
    }

    /// Write warning feedback
    pub fn warning(&mut self, message: &str) -> std::io::Result<()> {
        self.send(FeedbackType::Warning, message)
    }

    /// Write info feedback
    pub fn info(&mut self, message: &str) -> std::io::Result<()> {
        self.send(FeedbackType::Info, message)
    }

    /// Write a plain line with no tag, for listings
    pub fn line(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", message)
    }
}

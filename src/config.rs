//! Lexer and logging configuration.

use tracing::Level;

/// Options that change how lexemes are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    /// Treat `in` as a reserved word instead of an identifier.
    pub reserve_in: bool,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserved_in(mut self, reserve_in: bool) -> Self {
        self.reserve_in = reserve_in;
        self
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Multi-line, with targets and timestamps
    Pretty,
    /// One line per event
    #[default]
    Compact,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            crate::lexer::LOG_TARGET => self.lexer.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_config_defaults_to_unreserved_in() {
        assert!(!LexerConfig::default().reserve_in);
        assert!(LexerConfig::new().with_reserved_in(true).reserve_in);
    }

    #[test]
    fn test_level_for_falls_back_to_global() {
        let mut config = LogConfig::default();
        assert_eq!(config.level_for("minic::lexer"), Level::WARN);

        config.lexer = Some(Level::TRACE);
        assert_eq!(config.level_for("minic::lexer"), Level::TRACE);
        assert_eq!(config.level_for("minic::cli"), Level::WARN);
    }
}

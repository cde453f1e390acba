//! Owner of the currently loaded chat.
//!
//! An [`AnalysisSession`] holds the parser, the analysis settings, the stop
//! words and the emoji classifier, plus the messages of the last
//! successfully loaded export. Loading parses the new export completely
//! before replacing the old one, so a failed load keeps the previous chat.

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::Message;
use crate::analysis::{
    EmojiClassifier, Selection, StopWords, UnicodeEmoji, UserComparison, compare_users, user_list,
};
use crate::config::{AnalysisConfig, ParserConfig};
use crate::error::Result;
use crate::parser::ChatParser;
use crate::report::AnalysisReport;

/// One analyst session over one chat at a time.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::Selection;
/// use chatstat::session::AnalysisSession;
///
/// let mut session = AnalysisSession::new();
/// session.load_str("01/01/24, 10:00 - Alice: hi\n01/01/24, 10:01 - Bob: hey\n")?;
/// assert_eq!(session.users(), ["Overall", "Alice", "Bob"]);
///
/// let report = session.analyze(&Selection::user("Bob"));
/// assert_eq!(report.stats.messages, 1);
///
/// // A bad file leaves the loaded chat alone
/// assert!(session.load_str("not a chat").is_err());
/// assert_eq!(session.messages().len(), 2);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub struct AnalysisSession {
    parser: ChatParser,
    config: AnalysisConfig,
    stop_words: StopWords,
    classifier: Box<dyn EmojiClassifier>,
    messages: Vec<Message>,
}

impl AnalysisSession {
    /// A session with default settings, no stop words and [`UnicodeEmoji`].
    pub fn new() -> Self {
        Self {
            parser: ChatParser::new(),
            config: AnalysisConfig::default(),
            stop_words: StopWords::empty(),
            classifier: Box::new(UnicodeEmoji),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser = ChatParser::with_config(config);
        self
    }

    #[must_use]
    pub fn with_analysis_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl EmojiClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Reads the stop words from [`AnalysisConfig::stopwords_path`].
    ///
    /// On failure the current stop words are kept.
    pub fn load_stop_words(&mut self) -> Result<()> {
        let stop_words = StopWords::from_file(&self.config.stopwords_path)?;
        info!(path = %self.config.stopwords_path.display(), "loaded stop words");
        self.stop_words = stop_words;
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let messages = self.parser.parse_file(path)?;
        info!(path = %path.display(), messages = messages.len(), "loaded chat export");
        Ok(self.replace(messages))
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let messages = self.parser.parse_bytes(bytes)?;
        info!(messages = messages.len(), "loaded chat export");
        Ok(self.replace(messages))
    }

    /// Parses `content` and, on success, makes it the current chat.
    ///
    /// Returns the number of messages loaded.
    pub fn load_str(&mut self, content: &str) -> Result<usize> {
        let messages = self.parser.parse_str(content)?;
        info!(messages = messages.len(), "loaded chat export");
        Ok(self.replace(messages))
    }

    fn replace(&mut self, messages: Vec<Message>) -> usize {
        self.messages = messages;
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loaded(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Selection options for the loaded chat.
    pub fn users(&self) -> Vec<String> {
        user_list(&self.messages)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Runs every aggregation for `selection`.
    pub fn analyze(&self, selection: &Selection) -> AnalysisReport {
        AnalysisReport::build(
            &self.messages,
            selection,
            &self.config,
            &self.stop_words,
            self.classifier.as_ref(),
        )
    }

    pub fn compare(&self, user1: &str, user2: &str) -> Result<Vec<UserComparison>> {
        compare_users(&self.messages, user1, user2, self.classifier.as_ref())
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("parser", &self.parser)
            .field("config", &self.config)
            .field("messages", &self.messages.len())
            .finish_non_exhaustive()
    }
}

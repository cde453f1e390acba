//! Scoping every aggregation to the whole chat or one sender.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Label that selects every sender.
pub const OVERALL: &str = "Overall";

/// Which messages an aggregation looks at.
///
/// Applying a selection never mutates the record set; it yields a fresh
/// read-only view. An unknown user simply selects nothing.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::Selection;
///
/// assert_eq!(Selection::from_label("Overall"), Selection::Overall);
/// assert_eq!(Selection::from_label("Alice"), Selection::user("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// All messages, notifications included
    #[default]
    Overall,
    /// Messages sent by one user (exact, case-sensitive match)
    User(String),
}

impl Selection {
    /// Selects a single sender.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Maps a UI label to a selection; [`OVERALL`] means everyone.
    pub fn from_label(label: &str) -> Self {
        if label == OVERALL {
            Selection::Overall
        } else {
            Selection::user(label)
        }
    }

    /// Returns the label shown for this selection.
    pub fn label(&self) -> &str {
        match self {
            Selection::Overall => OVERALL,
            Selection::User(name) => name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Returns `true` if `msg` belongs to this selection.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => msg.sender() == name,
        }
    }

    /// Iterates over the selected messages in export order.
    pub fn apply<'a>(&'a self, messages: &'a [Message]) -> impl Iterator<Item = &'a Message> + 'a {
        messages.iter().filter(move |msg| self.matches(msg))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Collects the selected messages into a borrowed subset.
pub fn select<'a>(messages: &'a [Message], selection: &Selection) -> Vec<&'a Message> {
    messages.iter().filter(|msg| selection.matches(msg)).collect()
}

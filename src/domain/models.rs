use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reference entry: the literal command, what it does, and a filled-in example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandEntry {
    pub command: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// Remedy steps share the command shape; their order is the order to try them in.
pub type ProblemEntry = CommandEntry;

/// A named group of entries: a command category or a problem title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    pub entries: &'static [CommandEntry],
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Commands,
    Problems,
}

impl Section {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Commands => "Git Commands",
            Section::Problems => "Problems & Solutions",
        }
    }

    /// Prefix of the caption naming where a search hit came from.
    #[must_use]
    pub fn origin_label(&self) -> &'static str {
        match self {
            Section::Commands => "Category",
            Section::Problems => "Problem",
        }
    }

    #[must_use]
    pub fn other(&self) -> Self {
        match self {
            Section::Commands => Section::Problems,
            Section::Problems => Section::Commands,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Section] {
        &[Section::Commands, Section::Problems]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An entry matched by a search, tagged with the topic that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub topic: &'static str,
    pub entry: &'static CommandEntry,
}

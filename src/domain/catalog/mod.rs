use crate::domain::models::{CommandEntry, Section, Topic};
use std::collections::HashSet;
use thiserror::Error;

mod commands;
mod problems;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{section} catalog has no topics")]
    Empty { section: Section },
    #[error("topic #{index} in {section} has an empty name")]
    EmptyName { section: Section, index: usize },
    #[error("duplicate topic `{name}` in {section}")]
    DuplicateName { section: Section, name: &'static str },
    #[error("topic `{topic}` has no entries")]
    NoEntries { topic: &'static str },
    #[error("entry #{index} of `{topic}` has an empty {field}")]
    EmptyField {
        topic: &'static str,
        index: usize,
        field: &'static str,
    },
}

/// An ordered, read-only mapping of topic name to entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub section: Section,
    topics: &'static [Topic],
}

impl Catalog {
    #[must_use]
    pub const fn new(section: Section, topics: &'static [Topic]) -> Self {
        Self { section, topics }
    }

    #[must_use]
    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Topic> {
        self.topics.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.name == name)
    }

    #[must_use]
    pub fn topic_at(&self, index: usize) -> Option<&'static Topic> {
        self.topics.get(index)
    }

    /// Name of the first declared topic, the default selection.
    #[must_use]
    pub fn first_key(&self) -> &'static str {
        self.topics.first().map_or("", |t| t.name)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.topics.iter().map(|t| t.entries.len()).sum()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.topics.is_empty() {
            return Err(CatalogError::Empty {
                section: self.section,
            });
        }

        let mut seen = HashSet::new();
        for (index, topic) in self.topics.iter().enumerate() {
            if topic.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    section: self.section,
                    index,
                });
            }
            if !seen.insert(topic.name) {
                return Err(CatalogError::DuplicateName {
                    section: self.section,
                    name: topic.name,
                });
            }
            if topic.entries.is_empty() {
                return Err(CatalogError::NoEntries { topic: topic.name });
            }
            for (index, entry) in topic.entries.iter().enumerate() {
                if let Some(field) = empty_field(entry) {
                    return Err(CatalogError::EmptyField {
                        topic: topic.name,
                        index,
                        field,
                    });
                }
            }
        }
        Ok(())
    }
}

fn empty_field(entry: &CommandEntry) -> Option<&'static str> {
    [
        ("command", entry.command),
        ("description", entry.description),
        ("example", entry.example),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
}

#[must_use]
pub fn commands() -> Catalog {
    Catalog::new(Section::Commands, commands::COMMAND_TOPICS)
}

#[must_use]
pub fn problems() -> Catalog {
    Catalog::new(Section::Problems, problems::PROBLEM_TOPICS)
}

/// Both catalogs, as handed to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalogs {
    pub commands: Catalog,
    pub problems: Catalog,
}

impl Catalogs {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            commands: commands(),
            problems: problems(),
        }
    }

    #[must_use]
    pub fn for_section(&self, section: Section) -> &Catalog {
        match section {
            Section::Commands => &self.commands,
            Section::Problems => &self.problems,
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Pure page description built from the catalogs, the navigation state and
//! the search query. Widgets only draw what this module decides.

use crate::app::state::NavigationState;
use crate::domain::catalog::{Catalog, Catalogs};
use crate::domain::models::{CommandEntry, Section, Topic};
use crate::domain::search::search;

pub const COMMAND_COLUMNS: usize = 3;
pub const PROBLEM_SEARCH_COLUMNS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub command: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    /// "Category: ..." or "Problem: ..."; only set for search results.
    pub origin: Option<String>,
}

impl EntryCard {
    fn plain(entry: &CommandEntry) -> Self {
        Self {
            command: entry.command,
            description: entry.description,
            example: entry.example,
            origin: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedOption {
    pub label: String,
    pub card: EntryCard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Grid {
        columns: usize,
        rows: Vec<Vec<EntryCard>>,
    },
    Options(Vec<NumberedOption>),
    NoResults {
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub section: Section,
    pub title: String,
    pub searching: bool,
    pub content: Content,
    pub summary: String,
}

impl PageView {
    /// Cards per row; the numbered option list is a single column.
    #[must_use]
    pub fn columns(&self) -> usize {
        match &self.content {
            Content::Grid { columns, .. } => *columns,
            Content::Options(_) | Content::NoResults { .. } => 1,
        }
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        match &self.content {
            Content::Grid { rows, .. } => rows.iter().map(Vec::len).sum(),
            Content::Options(options) => options.len(),
            Content::NoResults { .. } => 0,
        }
    }

    /// Card at a flat index, counting row by row.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&EntryCard> {
        match &self.content {
            Content::Grid { rows, .. } => rows.iter().flatten().nth(index),
            Content::Options(options) => options.get(index).map(|o| &o.card),
            Content::NoResults { .. } => None,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.content {
            Content::Grid { rows, .. } => rows.len(),
            Content::Options(options) => options.len(),
            Content::NoResults { .. } => 0,
        }
    }
}

#[must_use]
pub fn build_page(catalogs: &Catalogs, nav: &NavigationState, query: &str) -> PageView {
    let section = nav.active_section;
    let catalog = catalogs.for_section(section);
    let searching = !query.is_empty();

    let (title, content) = if searching {
        (
            format!("Search Results for '{query}'"),
            search_content(catalog, query),
        )
    } else {
        let topic = selected_topic(catalog, nav.selected_key());
        (
            topic.map_or_else(String::new, |t| t.name.to_string()),
            browse_content(section, topic),
        )
    };

    PageView {
        section,
        title,
        searching,
        content,
        summary: summary(catalog),
    }
}

fn selected_topic(catalog: &Catalog, key: &str) -> Option<&'static Topic> {
    catalog.get(key).or_else(|| catalog.topic_at(0))
}

fn browse_content(section: Section, topic: Option<&'static Topic>) -> Content {
    let entries = topic.map_or(&[][..], |t| t.entries);
    match section {
        Section::Commands => Content::Grid {
            columns: COMMAND_COLUMNS,
            rows: entries
                .chunks(COMMAND_COLUMNS)
                .map(|row| row.iter().map(EntryCard::plain).collect())
                .collect(),
        },
        Section::Problems => Content::Options(
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| NumberedOption {
                    label: format!("Option {}", i + 1),
                    card: EntryCard::plain(entry),
                })
                .collect(),
        ),
    }
}

fn search_content(catalog: &Catalog, query: &str) -> Content {
    let hits = search(catalog, query);
    if hits.is_empty() {
        return Content::NoResults {
            message: match catalog.section {
                Section::Commands => "No commands found matching your search.",
                Section::Problems => "No solutions found matching your search.",
            },
        };
    }

    let columns = match catalog.section {
        Section::Commands => COMMAND_COLUMNS,
        Section::Problems => PROBLEM_SEARCH_COLUMNS,
    };
    let origin_label = catalog.section.origin_label();

    Content::Grid {
        columns,
        rows: hits
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|hit| EntryCard {
                        origin: Some(format!("{origin_label}: {}", hit.topic)),
                        ..EntryCard::plain(hit.entry)
                    })
                    .collect()
            })
            .collect(),
    }
}

fn summary(catalog: &Catalog) -> String {
    match catalog.section {
        Section::Commands => format!(
            "Total Commands: {} commands across {} categories",
            catalog.entry_count(),
            catalog.len()
        ),
        Section::Problems => format!(
            "Total Problems: {} common Git problems with solutions",
            catalog.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalogs, NavigationState) {
        let catalogs = Catalogs::builtin();
        let nav = NavigationState::new(&catalogs);
        (catalogs, nav)
    }

    #[test]
    fn test_every_category_renders_in_rows_of_three() {
        let (catalogs, mut nav) = setup();
        for topic in catalogs.commands.iter() {
            nav.select_category(&catalogs, topic.name);
            let page = build_page(&catalogs, &nav, "");

            assert_eq!(page.title, topic.name);
            let Content::Grid { columns, rows } = &page.content else {
                panic!("expected a grid for {}", topic.name);
            };
            assert_eq!(*columns, 3);
            assert!(rows.iter().all(|r| !r.is_empty() && r.len() <= 3));
            assert!(rows.iter().rev().skip(1).all(|r| r.len() == 3));

            let rendered: Vec<&str> = rows.iter().flatten().map(|c| c.command).collect();
            let declared: Vec<&str> = topic.entries.iter().map(|e| e.command).collect();
            assert_eq!(rendered, declared);
            assert!(rows.iter().flatten().all(|c| c.origin.is_none()));
        }
    }

    #[test]
    fn test_every_problem_renders_numbered_options() {
        let (catalogs, mut nav) = setup();
        nav.select_section(Section::Problems);
        for topic in catalogs.problems.iter() {
            nav.select_problem(&catalogs, topic.name);
            let page = build_page(&catalogs, &nav, "");

            let Content::Options(options) = &page.content else {
                panic!("expected options for {}", topic.name);
            };
            assert_eq!(options.len(), topic.entries.len());
            for (i, option) in options.iter().enumerate() {
                assert_eq!(option.label, format!("Option {}", i + 1));
                assert_eq!(option.card.command, topic.entries[i].command);
            }
        }
    }

    #[test]
    fn test_resolve_merge_conflicts_has_five_options() {
        let (catalogs, mut nav) = setup();
        nav.select_section(Section::Problems);
        nav.select_problem(&catalogs, "Resolve merge conflicts");
        let page = build_page(&catalogs, &nav, "");

        assert_eq!(page.title, "Resolve merge conflicts");
        assert_eq!(page.card_count(), 5);
        assert_eq!(page.card(0).unwrap().command, "git status");
    }

    #[test]
    fn test_command_search_results_carry_category_caption() {
        let (catalogs, nav) = setup();
        let page = build_page(&catalogs, &nav, "stash");

        assert!(page.searching);
        assert_eq!(page.title, "Search Results for 'stash'");
        assert_eq!(page.columns(), 3);
        assert_eq!(page.card_count(), 9);
        assert_eq!(
            page.card(0).unwrap().origin.as_deref(),
            Some("Category: Stashing in Git")
        );
    }

    #[test]
    fn test_problem_search_uses_two_columns() {
        let (catalogs, mut nav) = setup();
        nav.select_section(Section::Problems);
        let page = build_page(&catalogs, &nav, "upstream");

        let Content::Grid { columns, rows } = &page.content else {
            panic!("expected a grid");
        };
        assert_eq!(*columns, 2);
        assert!(rows.iter().all(|r| r.len() <= 2));
        assert_eq!(
            page.card(0).unwrap().origin.as_deref(),
            Some("Problem: Sync fork with original repository")
        );
    }

    #[test]
    fn test_search_ignores_current_selection() {
        let (catalogs, mut nav) = setup();
        nav.select_category(&catalogs, "Git Flow");
        let page = build_page(&catalogs, &nav, "stash");
        assert!(page.card(0).unwrap().command.contains("stash"));
    }

    #[test]
    fn test_no_results_state_is_explicit() {
        let (catalogs, mut nav) = setup();
        let page = build_page(&catalogs, &nav, "zzzz");
        assert_eq!(
            page.content,
            Content::NoResults {
                message: "No commands found matching your search."
            }
        );
        assert_eq!(page.card_count(), 0);

        nav.select_section(Section::Problems);
        let page = build_page(&catalogs, &nav, "zzzz");
        assert_eq!(
            page.content,
            Content::NoResults {
                message: "No solutions found matching your search."
            }
        );
    }

    #[test]
    fn test_empty_query_falls_back_to_selection() {
        let (catalogs, mut nav) = setup();
        nav.select_category(&catalogs, "Git Flow");
        let page = build_page(&catalogs, &nav, "");
        assert!(!page.searching);
        assert_eq!(page.title, "Git Flow");
        assert_eq!(page.card_count(), 3);
    }

    #[test]
    fn test_summary_depends_on_section() {
        let (catalogs, mut nav) = setup();
        assert_eq!(
            build_page(&catalogs, &nav, "").summary,
            "Total Commands: 165 commands across 20 categories"
        );
        nav.select_section(Section::Problems);
        assert_eq!(
            build_page(&catalogs, &nav, "").summary,
            "Total Problems: 8 common Git problems with solutions"
        );
    }
}

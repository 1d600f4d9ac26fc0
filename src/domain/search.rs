use crate::domain::catalog::Catalog;
use crate::domain::models::{SearchHit, Section};

/// Case-insensitive substring search over a catalog.
///
/// Matches against each entry's command and description; problem titles are
/// searched too, so every remedy under a matching problem is returned.
/// Results keep catalog order (topic, then entry) and are not ranked.
#[must_use]
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let match_titles = catalog.section == Section::Problems;
    let mut results = Vec::new();

    for topic in catalog.iter() {
        let title_matches = match_titles && topic.name.to_lowercase().contains(&query_lower);
        for entry in topic.entries {
            if title_matches
                || entry.command.to_lowercase().contains(&query_lower)
                || entry.description.to_lowercase().contains(&query_lower)
            {
                results.push(SearchHit {
                    topic: topic.name,
                    entry,
                });
            }
        }
    }

    results
}

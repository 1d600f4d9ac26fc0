use crate::domain::catalog::Catalogs;
use crate::domain::models::Section;

/// Which catalog is browsed and which topic is selected in each.
///
/// Both selections survive section switches, so toggling between
/// Commands and Problems returns to the previously selected topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Section,
    pub selected_category: &'static str,
    pub selected_problem: &'static str,
}

impl NavigationState {
    #[must_use]
    pub fn new(catalogs: &Catalogs) -> Self {
        Self {
            active_section: Section::Commands,
            selected_category: catalogs.commands.first_key(),
            selected_problem: catalogs.problems.first_key(),
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Returns `false` and leaves the selection alone for an unknown name.
    pub fn select_category(&mut self, catalogs: &Catalogs, name: &str) -> bool {
        match catalogs.commands.get(name) {
            Some(topic) => {
                self.selected_category = topic.name;
                true
            }
            None => false,
        }
    }

    pub fn select_problem(&mut self, catalogs: &Catalogs, name: &str) -> bool {
        match catalogs.problems.get(name) {
            Some(topic) => {
                self.selected_problem = topic.name;
                true
            }
            None => false,
        }
    }

    /// Key selected in the active section.
    #[must_use]
    pub fn selected_key(&self) -> &'static str {
        match self.active_section {
            Section::Commands => self.selected_category,
            Section::Problems => self.selected_problem,
        }
    }

    #[must_use]
    pub fn selected_index(&self, catalogs: &Catalogs) -> usize {
        catalogs
            .for_section(self.active_section)
            .position(self.selected_key())
            .unwrap_or(0)
    }

    pub fn select_topic_index(&mut self, catalogs: &Catalogs, index: usize) -> bool {
        let Some(topic) = catalogs.for_section(self.active_section).topic_at(index) else {
            return false;
        };
        match self.active_section {
            Section::Commands => self.selected_category = topic.name,
            Section::Problems => self.selected_problem = topic.name,
        }
        true
    }

    pub fn select_next_topic(&mut self, catalogs: &Catalogs) {
        let len = catalogs.for_section(self.active_section).len();
        if len == 0 {
            return;
        }
        let next = (self.selected_index(catalogs) + 1) % len;
        self.select_topic_index(catalogs, next);
    }

    pub fn select_prev_topic(&mut self, catalogs: &Catalogs) {
        let len = catalogs.for_section(self.active_section).len();
        if len == 0 {
            return;
        }
        let current = self.selected_index(catalogs);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.select_topic_index(catalogs, prev);
    }
}

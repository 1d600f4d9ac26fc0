use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use super::view::{build_page, PageView};
use crate::domain::catalog::Catalogs;
use crate::domain::models::Section;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;

pub mod input;
pub mod navigation;
pub mod status;
pub mod theme;

// Re-exports
pub use input::{AppTextArea, SearchState};
pub use navigation::NavigationState;
pub use status::{StatusMessage, StatusSeverity};
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing topics and cards
    Search,         // Typing into the search field
    Help,           // Showing the help overlay
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Panel {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focused_panel: Panel,
    pub status: Option<StatusMessage>,

    // --- Reference data & session navigation ---
    pub catalogs: Catalogs,
    pub navigation: NavigationState,
    pub search: SearchState<'a>,

    // Flat index of the highlighted card on the current page.
    pub selected_card: usize,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let palette_type = config.theme.unwrap_or_default();
        let mut state = Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type,
            theme: Theme::from_palette_type(palette_type),
            ..Default::default()
        };
        if let Some(section) = config.start_section {
            state.navigation.select_section(section);
        }
        state
    }

    /// Starts the session with a prefilled search query.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.search = SearchState::with_query(query);
        self.selected_card = 0;
        self
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.navigation.active_section
    }

    #[must_use]
    pub fn page(&self) -> PageView {
        build_page(&self.catalogs, &self.navigation, &self.search.query)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let catalogs = Catalogs::builtin();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focused_panel: Panel::Sidebar,
            status: None,
            navigation: NavigationState::new(&catalogs),
            catalogs,
            search: SearchState::default(),
            selected_card: 0,
            theme_selection: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}

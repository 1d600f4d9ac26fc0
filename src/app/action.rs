use crate::app::command::Command;
use crate::domain::models::Section;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation (Sidebar) ---
    SelectSection(Section),
    ToggleSection,
    SelectTopic(usize),
    SelectNextTopic,
    SelectPrevTopic,

    // --- Navigation (Content) ---
    SelectCard(usize),
    SelectNextCard,
    SelectPrevCard,
    SelectCardBelow,
    SelectCardAbove,
    FocusSidebar,
    FocusContent,
    ToggleFocus,

    // --- Search ---
    EnterSearchMode,
    ExitSearchMode,
    ClearSearch,
    TextAreaInput(crossterm::event::KeyEvent),

    // --- Clipboard ---
    CopySelected,
    CopyFinished(String, bool), // Copied text, success flag

    // --- UI Mode Transitions ---
    CancelMode,
    ToggleHelp,
    EnterThemeSelection,
    SelectThemeNext,
    SelectThemePrev,
    ConfirmThemeSelection,
}

use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    /// Opens the picker with the active palette preselected.
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        let selected_index = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            selected_index,
            themes,
        }
    }

    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.themes.len();
    }

    pub fn prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.themes.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PaletteType> {
        self.themes.get(self.selected_index).copied()
    }
}

impl Default for ThemeSelectionState {
    fn default() -> Self {
        Self::starting_at(PaletteType::default())
    }
}

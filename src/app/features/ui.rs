use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ThemeSelectionState},
};
use crate::theme::{PaletteType, Theme};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.theme_selection = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
            UpdateResult::Handled(None)
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.next();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                ts.prev();
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmThemeSelection => {
            if let Some(palette) = state.theme_selection.as_ref().and_then(|ts| ts.selected()) {
                apply_theme(state, palette);
            }
            state.theme_selection = None;
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_theme(state: &mut AppState, palette: PaletteType) {
    tracing::debug!(theme = palette.label(), "switching theme");
    state.palette_type = palette;
    state.theme = Theme::from_palette_type(palette);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_selection_flow() {
        let mut state = AppState::default();
        update(&mut state, &Action::EnterThemeSelection);
        assert_eq!(state.mode, AppMode::ThemeSelection);
        assert_eq!(
            state.theme_selection.as_ref().and_then(|ts| ts.selected()),
            Some(PaletteType::CatppuccinMocha)
        );

        update(&mut state, &Action::SelectThemeNext);
        update(&mut state, &Action::ConfirmThemeSelection);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Nord));
        assert!(state.theme_selection.is_none());
    }

    #[test]
    fn test_cancel_keeps_theme() {
        let mut state = AppState::default();
        update(&mut state, &Action::EnterThemeSelection);
        update(&mut state, &Action::SelectThemePrev);
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.palette_type, PaletteType::CatppuccinMocha);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_toggle_help() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);
    }
}
